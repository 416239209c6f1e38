//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Index page with the shorten form
//! - `POST /shorten`      - Shorten a URL (form in, JSON out)
//! - `GET  /list`         - All shortened URLs, newest first
//! - `GET  /stats/{code}` - Statistics page for a code
//! - `GET  /{code}`       - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::{index_handler, list_handler, stats_page_handler};
use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The catch-all `/{code}` route is registered last so the fixed routes
/// (`/shorten`, `/list`, `/stats/{code}`) take precedence.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/list", get(list_handler))
        .route("/stats/{code}", get(stats_page_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
