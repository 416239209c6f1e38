//! Handler for short URL redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::domain::entities::VisitMeta;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and records the access.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// On a hit the record's click counter is incremented and one access log
/// entry (client IP, user agent) is appended before the redirect is
/// returned. The response is a 302 Found, matching classic shortener
/// semantics so clients keep re-requesting through the short URL.
///
/// # Errors
///
/// Returns 404 Not Found for an unissued code.
pub async fn redirect_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let visit = VisitMeta {
        ip_address: Some(addr.ip().to_string()),
        user_agent,
    };

    let record = state.shortener_service.resolve(&code, visit).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    ))
}
