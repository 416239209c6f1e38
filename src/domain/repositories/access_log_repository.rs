//! Repository trait for access log retrieval.

use crate::domain::entities::AccessLogEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the access logger.
///
/// The log itself is append-only and written on the redirect path via
/// [`crate::domain::repositories::UrlRepository::record_visit`]; this trait
/// covers the read side used by the statistics view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Returns up to `limit` entries for the given URL, most recent first.
    async fn recent_for_url(
        &self,
        url_id: i64,
        limit: i64,
    ) -> Result<Vec<AccessLogEntry>, AppError>;
}
