//! SeaORM entity definitions
//!
//! One module per table. These mirror the storage layout and are converted
//! into domain entities by the SQL adapters.

pub mod character_vehicles;
pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;
pub mod vehicles;
