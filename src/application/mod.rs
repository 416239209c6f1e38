//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::ShortenerService`] - Code registry: shorten and resolve
//! - [`services::StatsService`] - Statistics and listing views

pub mod services;
