//! Domain entities
//!
//! Pure domain models representing the catalog.
//! These are separate from the SeaORM entities in the `entity` module.

/// Declares an integer identifier newtype for an entity.
///
/// Identities are assigned by storage on insert and are opaque to callers.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod character;
pub mod character_vehicle;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::{Character, CharacterId, NewCharacter};
pub use character_vehicle::{CharacterVehicleLink, CharacterVehicleLinkId, NewCharacterVehicleLink};
pub use favorite::{Favorite, FavoriteId, FavoriteTarget, NewFavorite};
pub use planet::{NewPlanet, Planet, PlanetId};
pub use user::{NewUser, User, UserId};
pub use vehicle::{NewVehicle, Vehicle, VehicleId};
