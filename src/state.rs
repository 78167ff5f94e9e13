//! Shared application state injected into request handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Application state shared across all request handlers.
///
/// Holds the link service and the base address used when composing short
/// URLs. Construction happens once at process start; handlers receive clones.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub base_url: String,
    pub db: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the service layer over a database pool.
    pub fn new(pool: Arc<SqlitePool>, base_url: String) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self {
            link_service,
            base_url,
            db: pool,
        }
    }
}
