//! Serialized forms of catalog entities
//!
//! Every view is a plain serde structure ready for JSON encoding. Association
//! edges are rendered as [`EntityRef`]s (id + name) rather than nested entities,
//! so a character's vehicle links never expand the vehicle's own links and
//! serialization depth stays bounded no matter how the graph is traversed.

use serde::Serialize;

use super::entities::{
    Character, CharacterId, CharacterVehicleLink, CharacterVehicleLinkId, Favorite, FavoriteId,
    FavoriteTarget, Planet, PlanetId, User, UserId, Vehicle, VehicleId,
};

/// Shallow reference to an associated entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRef {
    pub id: i32,
    pub name: String,
}

impl From<&Planet> for EntityRef {
    fn from(planet: &Planet) -> Self {
        Self {
            id: planet.id.0,
            name: planet.name.clone(),
        }
    }
}

impl From<&Character> for EntityRef {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.0,
            name: character.name.clone(),
        }
    }
}

impl From<&Vehicle> for EntityRef {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.0,
            name: vehicle.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetView {
    pub id: PlanetId,
    pub name: String,
    pub url: String,
    pub diameter_in_km: Option<f64>,
    pub rotation_period_in_days: Option<f64>,
    pub orbital_period_in_days: Option<f64>,
    pub gravity_in_g: Option<f64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water_percent: Option<f64>,
    /// Characters whose home planet this is
    pub characters: Vec<EntityRef>,
}

impl PlanetView {
    pub fn new(planet: Planet, characters: Vec<EntityRef>) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            url: planet.url,
            diameter_in_km: planet.diameter_in_km,
            rotation_period_in_days: planet.rotation_period_in_days,
            orbital_period_in_days: planet.orbital_period_in_days,
            gravity_in_g: planet.gravity_in_g,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water_percent: planet.surface_water_percent,
            characters,
        }
    }
}

/// One character-vehicle edge, with both ends as shallow references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterVehicleLinkView {
    pub id: CharacterVehicleLinkId,
    pub character_id: CharacterId,
    pub vehicle_id: VehicleId,
    /// `None` when the referenced character no longer resolves
    pub character: Option<EntityRef>,
    /// `None` when the referenced vehicle no longer resolves
    pub vehicle: Option<EntityRef>,
}

impl CharacterVehicleLinkView {
    pub fn new(
        link: &CharacterVehicleLink,
        character: Option<EntityRef>,
        vehicle: Option<EntityRef>,
    ) -> Self {
        Self {
            id: link.id,
            character_id: link.character_id,
            vehicle_id: link.vehicle_id,
            character,
            vehicle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterView {
    pub id: CharacterId,
    pub name: String,
    pub url: String,
    pub height_in_cm: Option<f64>,
    pub mass_in_kg: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birthyear: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<PlanetId>,
    pub planet: Option<EntityRef>,
    pub vehicles: Vec<CharacterVehicleLinkView>,
}

impl CharacterView {
    pub fn new(
        character: Character,
        planet: Option<EntityRef>,
        vehicles: Vec<CharacterVehicleLinkView>,
    ) -> Self {
        Self {
            id: character.id,
            name: character.name,
            url: character.url,
            height_in_cm: character.height_in_cm,
            mass_in_kg: character.mass_in_kg,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birthyear: character.birthyear,
            gender: character.gender,
            planet_id: character.planet_id,
            planet,
            vehicles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleView {
    pub id: VehicleId,
    pub name: String,
    pub url: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length_in_m: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed_in_kmh: Option<f64>,
    pub cargo_capacity_in_kg: Option<f64>,
    pub characters: Vec<CharacterVehicleLinkView>,
}

impl VehicleView {
    pub fn new(vehicle: Vehicle, characters: Vec<CharacterVehicleLinkView>) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            url: vehicle.url,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
            length_in_m: vehicle.length_in_m,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            max_atmosphering_speed_in_kmh: vehicle.max_atmosphering_speed_in_kmh,
            cargo_capacity_in_kg: vehicle.cargo_capacity_in_kg,
            characters,
        }
    }
}

/// The resolved item behind a favorite, serialized in its own full form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FavoriteSubject {
    Character(Box<CharacterView>),
    Planet(Box<PlanetView>),
    Vehicle(Box<VehicleView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteView {
    pub id: FavoriteId,
    pub user_id: UserId,
    /// Kind of the stored target, kept even when the target no longer resolves
    pub favorite_type: Option<&'static str>,
    pub favorite: Option<FavoriteSubject>,
}

impl FavoriteView {
    pub fn new(favorite: &Favorite, subject: Option<FavoriteSubject>) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            favorite_type: favorite.target.as_ref().map(FavoriteTarget::kind),
            favorite: subject,
        }
    }
}

/// A user with their favorites; the password is never part of the view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub favorites: Vec<FavoriteView>,
}

impl UserView {
    pub fn new(user: User, favorites: Vec<FavoriteView>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            favorites,
        }
    }
}
