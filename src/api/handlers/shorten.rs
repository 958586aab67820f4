//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "mylink"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "code": "aB3xYz",
///   "short_url": "https://s.example.com/aB3xYz",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - invalid URL or malformed custom code
/// - `409 Conflict` - custom code already taken
/// - `500 Internal Server Error` - storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.url, payload.custom_code)
        .await?;

    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            short_url,
            long_url: link.long_url,
        }),
    ))
}
