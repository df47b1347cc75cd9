//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod characters;
pub mod extract;
pub mod index;
pub mod planets;
pub mod users;
pub mod vehicles;

pub use characters::{
    create_characters, get_character, get_character_vehicles, link_vehicle, list_characters,
};
pub use index::{not_found, sitemap};
pub use planets::{create_planets, get_planet, list_planets};
pub use users::{add_favorite, create_user, get_user, get_user_favorites, list_users};
pub use vehicles::{create_vehicles, get_vehicle, get_vehicle_characters, list_vehicles};
