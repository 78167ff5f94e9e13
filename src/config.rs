//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup before the server starts. Every
//! variable has a development-oriented default, so the service runs with no
//! environment at all:
//!
//! ```bash
//! cargo run
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database location (default: `sqlite://urlmap.db`).
//!   The file is created if it does not exist.
//! - `BASE_URL` - Prefix used when composing short URLs
//!   (default: `http://127.0.0.1:3000`)
//! - `LISTEN` - Bind address (default: `127.0.0.1:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefix for composed short URLs, e.g. `http://127.0.0.1:3000`.
    /// A trailing slash is tolerated.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urlmap.db".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
        })
    }
}
