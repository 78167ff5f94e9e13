//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx against a
//! local single-file SQLite database.

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
