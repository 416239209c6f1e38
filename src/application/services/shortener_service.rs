//! Short code allocation and redirect resolution service.

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord, VisitMeta};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Maximum code generation attempts before giving up.
///
/// Bounding the retry loop turns a pathological storage state into a
/// diagnosable error instead of a hang.
const MAX_ATTEMPTS: usize = 10;

/// Service implementing the code registry: shorten and resolve.
///
/// Handles URL normalization, deduplication, collision-free code allocation,
/// and the click-count/access-log write on the redirect path.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    rng: Mutex<StdRng>,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a service with an OS-seeded random source.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_rng(repository, StdRng::from_os_rng())
    }

    /// Creates a service with an explicit random source.
    ///
    /// A seeded generator makes code allocation deterministic in tests.
    pub fn with_rng(repository: Arc<R>, rng: StdRng) -> Self {
        Self {
            repository,
            rng: Mutex::new(rng),
        }
    }

    /// Shortens a URL, returning the existing record when the normalized URL
    /// is already known.
    ///
    /// # Code Allocation
    ///
    /// Generates a random 6-character alphanumeric candidate and inserts it.
    /// The store's unique constraint on `short_code` rejects a colliding
    /// insert; the service retries with a fresh code up to [`MAX_ATTEMPTS`]
    /// times. A unique violation on `original_url` means another request
    /// shortened the same URL concurrently, in which case the winner's record
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the URL is empty.
    /// Returns [`AppError::Internal`] on database errors or when no free code
    /// is found within the attempt limit.
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        let normalized_url = normalize_url(raw_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "url", "value": raw_url }))
        })?;

        if let Some(existing) = self
            .repository
            .find_by_original_url(&normalized_url)
            .await?
        {
            return Ok(existing);
        }

        for attempt in 0..MAX_ATTEMPTS {
            let code = self.next_code();

            let new_record = NewUrlRecord {
                original_url: normalized_url.clone(),
                short_code: code,
            };

            match self.repository.create(new_record).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    // Either a code collision or a concurrent insert of the
                    // same URL. The latter wins the dedup race.
                    if let Some(existing) = self
                        .repository
                        .find_by_original_url(&normalized_url)
                        .await?
                    {
                        return Ok(existing);
                    }

                    tracing::warn!(attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "too many collisions" }),
        ))
    }

    /// Resolves a short code for a redirect, recording the access.
    ///
    /// On a hit the record's click count is incremented and one access log
    /// entry is appended, atomically. The returned record reflects the
    /// incremented count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unissued code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str, visit: VisitMeta) -> Result<UrlRecord, AppError> {
        self.repository
            .record_visit(code, visit)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))
    }

    fn next_code(&self) -> String {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        generate_code(&mut *rng)
    }
}
