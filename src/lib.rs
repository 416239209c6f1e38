//! # linkcut
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - Shorten endpoint and redirect handling
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Features
//!
//! - Collision-free 6-character alphanumeric short codes
//! - Idempotent shortening (duplicate URLs reuse their code)
//! - Atomic click counting with a per-access log
//! - Statistics and listing views
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: where the SQLite file lives (created on first run)
//! export DATABASE_DIR="./data"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, StatsService, UrlStats};
    pub use crate::domain::entities::{AccessLogEntry, NewUrlRecord, UrlRecord, VisitMeta};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
