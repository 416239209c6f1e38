//! Shared application state injected into handlers.

use std::sync::Arc;

use rand::rngs::StdRng;
use sqlx::SqlitePool;

use crate::application::services::{ShortenerService, StatsService};
use crate::infrastructure::persistence::{SqliteAccessLogRepository, SqliteUrlRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<SqliteUrlRepository>>,
    pub stats_service: Arc<StatsService<SqliteUrlRepository, SqliteAccessLogRepository>>,
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services over the given pool.
    pub fn new(pool: SqlitePool, base_url: String) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
        let access_log_repository = Arc::new(SqliteAccessLogRepository::new(pool));

        Self {
            shortener_service: Arc::new(ShortenerService::new(url_repository.clone())),
            stats_service: Arc::new(StatsService::new(url_repository, access_log_repository)),
            base_url,
        }
    }

    /// Like [`AppState::new`] but with an explicit random source for
    /// deterministic code generation.
    pub fn with_rng(pool: SqlitePool, base_url: String, rng: StdRng) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
        let access_log_repository = Arc::new(SqliteAccessLogRepository::new(pool));

        Self {
            shortener_service: Arc::new(ShortenerService::with_rng(url_repository.clone(), rng)),
            stats_service: Arc::new(StatsService::new(url_repository, access_log_repository)),
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
