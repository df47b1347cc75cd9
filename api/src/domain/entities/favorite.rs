//! Favorite domain entity
//!
//! A favorite belongs to one user and points at exactly one catalog item.
//! Storage keeps three nullable foreign keys; the domain exposes them as a
//! single [`FavoriteTarget`].

use serde::{Deserialize, Serialize};

use super::character::CharacterId;
use super::planet::PlanetId;
use super::user::UserId;
use super::vehicle::VehicleId;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a favorite
    FavoriteId
}

/// The catalog item a favorite refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum FavoriteTarget {
    Character(CharacterId),
    Planet(PlanetId),
    Vehicle(VehicleId),
}

impl FavoriteTarget {
    /// Read a target from the three stored foreign keys.
    ///
    /// Rows with more than one key set resolve to the first of character,
    /// planet, vehicle. Rows with none set have no target.
    pub fn from_columns(
        character_id: Option<i32>,
        planet_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Option<Self> {
        character_id
            .map(|id| FavoriteTarget::Character(CharacterId(id)))
            .or_else(|| planet_id.map(|id| FavoriteTarget::Planet(PlanetId(id))))
            .or_else(|| vehicle_id.map(|id| FavoriteTarget::Vehicle(VehicleId(id))))
    }

    /// Build a target from a request naming exactly one of the three keys
    pub fn exactly_one(
        character_id: Option<CharacterId>,
        planet_id: Option<PlanetId>,
        vehicle_id: Option<VehicleId>,
    ) -> Result<Self, DomainError> {
        match (character_id, planet_id, vehicle_id) {
            (Some(id), None, None) => Ok(FavoriteTarget::Character(id)),
            (None, Some(id), None) => Ok(FavoriteTarget::Planet(id)),
            (None, None, Some(id)) => Ok(FavoriteTarget::Vehicle(id)),
            (None, None, None) => Err(DomainError::Validation(
                "one of character_id, planet_id or vehicle_id is required".to_string(),
            )),
            _ => Err(DomainError::Validation(
                "only one of character_id, planet_id or vehicle_id may be set".to_string(),
            )),
        }
    }

    pub fn character_id(&self) -> Option<CharacterId> {
        match self {
            FavoriteTarget::Character(id) => Some(*id),
            _ => None,
        }
    }

    pub fn planet_id(&self) -> Option<PlanetId> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            _ => None,
        }
    }

    pub fn vehicle_id(&self) -> Option<VehicleId> {
        match self {
            FavoriteTarget::Vehicle(id) => Some(*id),
            _ => None,
        }
    }

    /// Discriminator used in serialized output
    pub fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Vehicle(_) => "vehicle",
        }
    }
}

impl std::fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoriteTarget::Character(id) => write!(f, "character {}", id),
            FavoriteTarget::Planet(id) => write!(f, "planet {}", id),
            FavoriteTarget::Vehicle(id) => write!(f, "vehicle {}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    /// `None` only for stored rows with no key set
    pub target: Option<FavoriteTarget>,
}

/// Data needed to create a new favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub target: FavoriteTarget,
}
