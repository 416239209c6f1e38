//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Code registry: URL records and click counting
//! - [`AccessLogRepository`] - Access log reads for the statistics view

pub mod access_log_repository;
pub mod url_repository;

pub use access_log_repository::AccessLogRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
