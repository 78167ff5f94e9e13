//! # urlmap
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers with a single dependency direction:
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and repository trait
//! - **Application Layer** ([`application`]) - Link creation and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - Submit a long URL, receive a short one
//! - `GET /{code}`   - Redirect to the original URL and count the visit
//! - `GET /health`   - Service health check
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything is optional; the defaults run against ./urlmap.db
//! export DATABASE_URL="sqlite://urlmap.db"
//! export BASE_URL="http://127.0.0.1:3000"
//!
//! cargo run
//! ```
//!
//! The database schema is created automatically at startup if absent.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
