//! Link allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertError, LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::error;

/// Upper bound on random-code insert attempts. At 62^6 possible codes a
/// second collision is already astronomically unlikely; the cap exists so the
/// loop terminates even under a pathological request pattern.
const MAX_ATTEMPTS: usize = 10;

/// Service for binding short codes to URLs and resolving them back.
///
/// Stateless apart from the injected repository; any number of instances may
/// share one database safely, since all uniqueness coordination happens in
/// the storage engine.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Binds a short code to `long_url` and returns the created mapping.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided and non-empty, it is validated and
    ///   inserted exactly once; a collision is reported as a conflict, never
    ///   resolved automatically -- the caller chose this code and has no
    ///   fallback value to retry with.
    /// - Otherwise a random 6-character code is inserted optimistically,
    ///   retrying on collision up to an internal cap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is
    /// malformed, [`AppError::Conflict`] if the custom code is taken, and
    /// [`AppError::Internal`] on storage failures or retry exhaustion.
    pub async fn shorten(
        &self,
        long_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&long_url)?;

        match custom_code.filter(|c| !c.is_empty()) {
            Some(code) => self.insert_custom(long_url, code).await,
            None => self.insert_random(long_url).await,
        }
    }

    /// Resolves a short code to its mapping.
    ///
    /// A plain read; resolving the same code any number of times returns the
    /// same URL. An unknown code is an expected outcome and is not logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code,
    /// [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        match self.repository.find_by_code(code).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
            Err(e) => Err(storage_error("lookup", code, &e)),
        }
    }

    /// Constructs the full short URL from the service base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Single insert attempt with a user-chosen code.
    async fn insert_custom(&self, long_url: String, code: String) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        let new_link = NewLink {
            code: code.clone(),
            long_url,
        };

        match self.repository.insert(new_link).await {
            Ok(link) => Ok(link),
            Err(InsertError::DuplicateCode) => Err(AppError::conflict(
                "Custom code already exists",
                json!({ "code": code }),
            )),
            Err(InsertError::Store(e)) => Err(storage_error("insert", &code, &e)),
        }
    }

    /// Optimistic insert loop with generated codes.
    ///
    /// Collisions are expected to be rare; each one discards the candidate
    /// and draws a fresh code. Non-constraint failures abort immediately.
    async fn insert_random(&self, long_url: String) -> Result<Link, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(DEFAULT_CODE_LENGTH);

            let new_link = NewLink {
                code: code.clone(),
                long_url: long_url.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(InsertError::DuplicateCode) => continue,
                Err(InsertError::Store(e)) => return Err(storage_error("insert", &code, &e)),
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}

/// Logs a storage failure with its context and returns the generic error
/// surfaced to callers. Engine details stay in the log.
fn storage_error(operation: &str, code: &str, e: &StoreError) -> AppError {
    error!(operation, code, "storage failure: {e}");
    AppError::internal("Database error", json!({}))
}
