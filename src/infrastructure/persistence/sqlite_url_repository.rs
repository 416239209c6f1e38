//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::entities::{NewUrlRecord, UrlRecord, VisitMeta};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for URL record storage and retrieval.
///
/// Uses prepared statements with bound parameters throughout. Uniqueness of
/// `short_code` and `original_url` is enforced by the schema's unique
/// indexes; violations surface as [`AppError::Conflict`].
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, click_count)
            VALUES (?, ?, ?, 0)
            RETURNING id, original_url, short_code, created_at, click_count
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            WHERE original_url = ?
            "#,
        )
        .bind(original_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(records)
    }

    async fn record_visit(
        &self,
        code: &str,
        visit: VisitMeta,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET click_count = click_count + 1
            WHERE short_code = ?
            RETURNING id, original_url, short_code, created_at, click_count
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Dropping the transaction on the miss path rolls it back.
        let Some(record) = record else {
            return Ok(None);
        };

        sqlx::query(
            r#"
            INSERT INTO access_logs (url_id, ip_address, user_agent, accessed_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(&visit.ip_address)
        .bind(&visit.user_agent)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(Some(record))
    }
}
