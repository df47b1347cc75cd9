//! Character-vehicle association
//!
//! One row per "character operates vehicle" edge. A character may operate many
//! vehicles and a vehicle may be operated by many characters.

use super::character::CharacterId;
use super::vehicle::VehicleId;

entity_id! {
    /// Unique identifier for a character-vehicle link
    CharacterVehicleLinkId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterVehicleLink {
    pub id: CharacterVehicleLinkId,
    pub character_id: CharacterId,
    pub vehicle_id: VehicleId,
}

/// Data needed to link a character to a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCharacterVehicleLink {
    pub character_id: CharacterId,
    pub vehicle_id: VehicleId,
}
