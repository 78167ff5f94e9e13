//! Repository trait for link data access.
//!
//! The trait abstracts the storage layer behind the Repository pattern.
//! The concrete implementation lives in `crate::infrastructure::persistence`;
//! a `mockall` mock is generated for unit tests.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single `links` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping with a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a mapping by its short code without touching the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter of the mapping with the given
    /// code and returns the updated row, or `None` when no mapping matches.
    ///
    /// The increment happens in a single UPDATE statement so concurrent
    /// resolutions of the same code never lose a count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, code: &str) -> Result<Option<Link>, AppError>;
}
