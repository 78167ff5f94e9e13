//! DTOs for HTTP request and response bodies.

pub mod health;
pub mod shorten;

pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use shorten::{ShortenRequest, ShortenResponse};
