//! Handlers for short URL redirect and the root usage banner.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Every resolution reads the store directly; there is no cache in between.
/// Responds with `308 Permanent Redirect` -- a mapping never changes once
/// created, so user agents are free to remember it.
///
/// # Errors
///
/// Returns `404 Not Found` if the short code does not exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&code).await?;

    Ok(Redirect::permanent(&link.long_url))
}

/// Plain-text usage banner served at the root path.
///
/// # Endpoint
///
/// `GET /`
pub async fn usage_handler() -> &'static str {
    "URL Shortener Service\n\
     POST to /api/shorten with JSON body {\"url\": \"https://example.com\"} to get a short URL.\n"
}
