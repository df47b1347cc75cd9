//! Test utilities
//!
//! In-memory repository implementations and fixtures for service tests, plus
//! a helper that opens a fresh SQLite in-memory database with the schema
//! applied, for adapter and HTTP tests.
//!
//! The in-memory repositories are written by hand rather than generated: they
//! behave like a small store (ids, ordering, uniqueness) instead of replaying
//! canned answers, so service tests read as scenarios.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

use sea_orm::{Database, DatabaseConnection};

use crate::adapters::sql::ensure_schema;

/// Open an empty SQLite in-memory database with every table created
pub async fn memory_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&db)
        .await
        .expect("Failed to create schema");
    db
}
