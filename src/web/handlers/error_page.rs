//! Rendered error page for the HTML views.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the error page.
///
/// Used by the HTML views when a short code cannot be found, mirroring the
/// JSON error responses of the API surface.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}
