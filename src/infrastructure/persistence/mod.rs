//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits over an `sqlx`
//! SQLite pool. The store is a single embedded database file created on
//! first startup (see [`crate::server`]).
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL record storage, click counting
//! - [`SqliteAccessLogRepository`] - Access log reads

pub mod sqlite_access_log_repository;
pub mod sqlite_url_repository;

pub use sqlite_access_log_repository::SqliteAccessLogRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
