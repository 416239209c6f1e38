//! Access log entry recorded for each redirect.

use chrono::{DateTime, Utc};

/// A single access to a shortened URL.
///
/// Append-only: entries are written once on the redirect path and never
/// mutated or deleted. `url_id` references the owning [`super::UrlRecord`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AccessLogEntry {
    pub id: i64,
    pub url_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub accessed_at: DateTime<Utc>,
}

/// Client metadata captured at access time.
///
/// Both fields are opaque strings taken from the request; either may be
/// absent when the client does not supply them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_entry_minimal() {
        let entry = AccessLogEntry {
            id: 1,
            url_id: 10,
            ip_address: None,
            user_agent: None,
            accessed_at: Utc::now(),
        };

        assert_eq!(entry.url_id, 10);
        assert!(entry.ip_address.is_none());
        assert!(entry.user_agent.is_none());
    }

    #[test]
    fn test_visit_meta_default_is_empty() {
        let visit = VisitMeta::default();
        assert!(visit.ip_address.is_none());
        assert!(visit.user_agent.is_none());
    }
}
