//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// Looks up the mapping and increments its click counter in a single atomic
/// statement, then answers `302 Found` with the original URL in the
/// `Location` header.
///
/// # Errors
///
/// Returns 404 `{"error": "URL not found"}` when no mapping matches the code;
/// the counter of no row is touched in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(code = %link.code, clicks = link.clicks, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.long_url)],
    ))
}
