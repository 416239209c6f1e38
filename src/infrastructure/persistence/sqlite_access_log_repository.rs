//! SQLite implementation of the access log repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::AccessLogEntry;
use crate::domain::repositories::AccessLogRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for access log reads.
pub struct SqliteAccessLogRepository {
    pool: SqlitePool,
}

impl SqliteAccessLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for SqliteAccessLogRepository {
    async fn recent_for_url(
        &self,
        url_id: i64,
        limit: i64,
    ) -> Result<Vec<AccessLogEntry>, AppError> {
        let entries = sqlx::query_as::<_, AccessLogEntry>(
            r#"
            SELECT id, url_id, ip_address, user_agent, accessed_at
            FROM access_logs
            WHERE url_id = ?
            ORDER BY accessed_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entries)
    }
}
