//! Handler for the shorten endpoint.

use axum::{Form, Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL submitted as the `url` form field.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:3000/Ab3xYz", "original_url": "http://google.com" }
/// ```
///
/// Shortening an already-known URL returns the existing code; the operation
/// is idempotent per normalized URL.
///
/// # Errors
///
/// Returns 400 Bad Request when the `url` field is missing or empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    form.validate()?;

    let record = state.shortener_service.shorten(&form.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&record.short_code),
        original_url: record.original_url,
    }))
}
