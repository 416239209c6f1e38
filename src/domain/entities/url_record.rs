//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its code and click counter.
///
/// `short_code` and `original_url` are both unique within the store:
/// the code is the lookup key for redirects, and the URL acts as a natural
/// dedup key so shortening the same URL twice yields the same record.
/// Only `click_count` is ever mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}
