//! Statistics and listing service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{AccessLogEntry, UrlRecord};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;

/// Number of recent access log entries returned by the statistics view.
pub const RECENT_ACCESS_LIMIT: i64 = 10;

/// A URL record together with its most recent accesses.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub record: UrlRecord,
    pub recent_accesses: Vec<AccessLogEntry>,
}

/// Service for the statistics and listing views.
pub struct StatsService<U: UrlRepository, A: AccessLogRepository> {
    url_repository: Arc<U>,
    access_log_repository: Arc<A>,
}

impl<U: UrlRepository, A: AccessLogRepository> StatsService<U, A> {
    /// Creates a new statistics service.
    pub fn new(url_repository: Arc<U>, access_log_repository: Arc<A>) -> Self {
        Self {
            url_repository,
            access_log_repository,
        }
    }

    /// Retrieves a record and up to [`RECENT_ACCESS_LIMIT`] of its accesses,
    /// most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<UrlStats, AppError> {
        let record = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))?;

        let recent_accesses = self
            .access_log_repository
            .recent_for_url(record.id, RECENT_ACCESS_LIMIT)
            .await?;

        Ok(UrlStats {
            record,
            recent_accesses,
        })
    }

    /// Lists every shortened URL, newest first. Unbounded by design.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list_all().await
    }
}
