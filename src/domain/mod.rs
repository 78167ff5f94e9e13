//! Domain layer containing the core business model.
//!
//! - [`entities`] - The `Link` mapping entity
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits define contracts implemented in
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
