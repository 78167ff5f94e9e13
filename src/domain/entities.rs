//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and its original URL.
///
/// A mapping is created once and never modified afterwards, except for the
/// `clicks` counter which grows by one on every successful resolution.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub long_url: String,
    pub code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
