//! Destination URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that the input is an absolute URL with a scheme and a host.
///
/// Relative paths, empty strings, and scheme-only strings are rejected. The
/// URL is stored as given; no normalization is applied.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the input does not parse or has no
/// host component.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "URL must have a host",
            json!({ "url": input }),
        ));
    }

    Ok(())
}
