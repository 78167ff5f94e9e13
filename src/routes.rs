//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Create a short URL
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /health`  - Health check
//!
//! Exact routes take precedence over the `{code}` capture, so `/health` is
//! never shadowed by a short code lookup.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
