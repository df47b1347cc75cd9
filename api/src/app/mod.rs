//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the serializer
//! that turns loaded entities into views.

pub mod catalog_service;
pub mod serializer;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use serializer::CatalogSerializer;
pub use user_service::UserService;
