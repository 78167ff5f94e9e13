//! Handler for the link shortening endpoint.

use axum::{extract::State, Json};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a submitted long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://127.0.0.1:3000/aB3xY9" }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "URL is required"}` when the `url` field is absent
/// or empty. No other validation is performed on the submitted URL; it is
/// stored verbatim.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let long_url = match payload.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::bad_request("URL is required")),
    };

    let link = state.link_service.create_short_link(long_url).await?;

    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse { short_url }))
}
