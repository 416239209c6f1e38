//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form payload for `POST /shorten`.
///
/// A missing `url` field deserializes to an empty string and fails
/// validation, so both absent and empty input produce a 400 response.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response for a successful shorten request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
}
