//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against PostgreSQL in production and SQLite in tests.

pub mod character_repo;
pub mod character_vehicle_repo;
pub mod favorite_repo;
pub mod planet_repo;
pub mod schema;
pub mod user_repo;
pub mod vehicle_repo;

#[cfg(test)]
mod integration_tests;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

pub use character_repo::SqlCharacterRepository;
pub use character_vehicle_repo::SqlCharacterVehicleRepository;
pub use favorite_repo::SqlFavoriteRepository;
pub use planet_repo::SqlPlanetRepository;
pub use schema::ensure_schema;
pub use user_repo::SqlUserRepository;
pub use vehicle_repo::SqlVehicleRepository;

/// Map a SeaORM error onto the domain error space.
///
/// Constraint failures reported by the driver become `ConstraintViolation`;
/// everything else is a `Database` error.
pub(crate) fn db_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::ConstraintViolation(format!("unique constraint failed: {}", msg))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            DomainError::ConstraintViolation(format!("foreign key constraint failed: {}", msg))
        }
        _ => DomainError::Database(err.to_string()),
    }
}
