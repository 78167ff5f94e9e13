//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and resolving shortened links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a mapping for `long_url` under a freshly generated code.
    ///
    /// The URL is stored verbatim; no format, length, or scheme validation is
    /// performed beyond the presence check at the HTTP boundary.
    ///
    /// # Code Generation
    ///
    /// Codes are random 6-character alphanumeric strings. Uniqueness is
    /// enforced by the storage layer's UNIQUE constraint; on a collision the
    /// insert is retried with a new code, up to five times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every attempt collides or the
    /// database fails.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 5;

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict(_)) => {
                    tracing::warn!("short code collision, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to generate unique code"))
    }

    /// Resolves a short code, counting the visit.
    ///
    /// The click counter is incremented atomically in the same statement that
    /// fetches the mapping, so this is the only mutation path besides
    /// creation and it never undercounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .record_visit(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Constructs the full short URL from the service base address and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
