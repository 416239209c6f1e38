//! URL listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Row of the listing table, preformatted for rendering.
pub struct UrlRow {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    pub click_count: i64,
}

impl UrlRow {
    fn from_record(record: UrlRecord, state: &AppState) -> Self {
        Self {
            short_url: state.short_url(&record.short_code),
            short_code: record.short_code,
            original_url: record.original_url,
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            click_count: record.click_count,
        }
    }
}

/// Template for the listing page.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub urls: Vec<UrlRow>,
}

/// Renders all shortened URLs, newest first.
///
/// # Endpoint
///
/// `GET /list`
pub async fn list_handler(State(state): State<AppState>) -> Result<ListTemplate, AppError> {
    let records = state.stats_service.list_all().await?;

    let urls = records
        .into_iter()
        .map(|r| UrlRow::from_record(r, &state))
        .collect();

    Ok(ListTemplate { urls })
}
