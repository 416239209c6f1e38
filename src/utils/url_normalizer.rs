//! URL normalization.

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,
}

/// Normalizes a raw URL into the scheme-qualified form used as the dedup key.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. URLs without an `http://` or `https://` scheme get `http://` prefixed
/// 3. Everything else (case, path, query) is preserved as-is
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] when the input is empty after
/// trimming.
pub fn normalize_url(raw: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("http://{trimmed}"))
    }
}
