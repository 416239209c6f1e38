//! HTTP API layer for the machine-facing endpoints.
//!
//! Translates HTTP requests into domain operations: the JSON shorten
//! endpoint and the redirect path.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
