//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing the catalog
//! - `ports`: Trait definitions for external dependencies
//! - `validation`: Field checks for create payloads
//! - `views`: Serialized forms of entities and their associations

pub mod entities;
pub mod ports;
pub mod validation;
pub mod views;
