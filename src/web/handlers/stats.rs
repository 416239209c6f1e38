//! URL statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::services::UrlStats;
use crate::domain::entities::AccessLogEntry;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::error_page::ErrorTemplate;

/// Row of the recent accesses table, preformatted for rendering.
pub struct AccessRow {
    pub ip_address: String,
    pub user_agent: String,
    pub accessed_at: String,
}

impl From<AccessLogEntry> for AccessRow {
    fn from(entry: AccessLogEntry) -> Self {
        Self {
            ip_address: entry.ip_address.unwrap_or_default(),
            user_agent: entry.user_agent.unwrap_or_default(),
            accessed_at: entry.accessed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Template for the statistics page.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    pub click_count: i64,
    pub recent_accesses: Vec<AccessRow>,
}

impl StatsTemplate {
    fn from_stats(stats: UrlStats, state: &AppState) -> Self {
        let record = stats.record;
        Self {
            short_url: state.short_url(&record.short_code),
            short_code: record.short_code,
            original_url: record.original_url,
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            click_count: record.click_count,
            recent_accesses: stats.recent_accesses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders the statistics page for a short code: the record plus its most
/// recent accesses.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Errors
///
/// An unknown code renders the error page with a 404 status.
pub async fn stats_page_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.stats_service.stats(&code).await {
        Ok(stats) => Ok(StatsTemplate::from_stats(stats, &state).into_response()),
        Err(AppError::NotFound { .. }) => {
            let page = ErrorTemplate {
                message: "URL not found".to_string(),
            };
            Ok((StatusCode::NOT_FOUND, page).into_response())
        }
        Err(e) => Err(e),
    }
}
