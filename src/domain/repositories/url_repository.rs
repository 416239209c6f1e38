//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord, VisitMeta};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code registry.
///
/// Owns the mapping from short code to original URL, including click counting
/// on the redirect path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code or the original URL
    /// already exists (both carry unique constraints).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code. Exact match, case-sensitive.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its normalized original URL.
    ///
    /// Used to deduplicate shorten requests for an already-known URL.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Lists all records, newest first.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Records an access to the URL behind `code`.
    ///
    /// Increments the record's click counter by one and appends an access log
    /// entry with the given metadata. Both mutations happen in a single
    /// transaction; either both are durable or neither is.
    ///
    /// Returns `Ok(None)` if the code does not exist (nothing is written).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(
        &self,
        code: &str,
        visit: VisitMeta,
    ) -> Result<Option<UrlRecord>, AppError>;
}
