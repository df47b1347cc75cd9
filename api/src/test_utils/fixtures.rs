//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Stored entities take an explicit id; `new_*` payloads derive their url from
//! the name so distinct names never collide on either unique key.

use crate::domain::entities::{
    Character, CharacterId, NewCharacter, NewPlanet, NewUser, NewVehicle, Planet, PlanetId, User,
    UserId, Vehicle, VehicleId,
};

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Create a stored planet with only the required fields set
pub fn test_planet(id: i32, name: &str) -> Planet {
    Planet {
        id: PlanetId(id),
        name: name.to_string(),
        url: format!("https://catalog.test/planets/{}", id),
        diameter_in_km: None,
        rotation_period_in_days: None,
        orbital_period_in_days: None,
        gravity_in_g: None,
        population: None,
        climate: None,
        terrain: None,
        surface_water_percent: None,
    }
}

/// Create a stored character, optionally homed on `planet_id`
pub fn test_character(id: i32, name: &str, planet_id: Option<i32>) -> Character {
    Character {
        id: CharacterId(id),
        name: name.to_string(),
        url: format!("https://catalog.test/characters/{}", id),
        height_in_cm: None,
        mass_in_kg: None,
        hair_color: None,
        skin_color: None,
        eye_color: None,
        birthyear: None,
        gender: None,
        planet_id: planet_id.map(PlanetId),
    }
}

pub fn test_vehicle(id: i32, name: &str) -> Vehicle {
    Vehicle {
        id: VehicleId(id),
        name: name.to_string(),
        url: format!("https://catalog.test/vehicles/{}", id),
        model: None,
        vehicle_class: None,
        manufacturer: None,
        cost_in_credits: None,
        length_in_m: None,
        crew: None,
        passengers: None,
        max_atmosphering_speed_in_kmh: None,
        cargo_capacity_in_kg: None,
    }
}

pub fn test_user(id: i32, username: &str) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        password: format!("{}-secret", username),
    }
}

/// Create-payload for a planet
pub fn new_planet(name: &str) -> NewPlanet {
    NewPlanet {
        name: name.to_string(),
        url: format!("https://catalog.test/planets/{}", slug(name)),
        diameter_in_km: None,
        rotation_period_in_days: None,
        orbital_period_in_days: None,
        gravity_in_g: None,
        population: None,
        climate: None,
        terrain: None,
        surface_water_percent: None,
    }
}

/// Create-payload for a character
pub fn new_character(name: &str, planet_id: Option<i32>) -> NewCharacter {
    NewCharacter {
        name: name.to_string(),
        url: format!("https://catalog.test/characters/{}", slug(name)),
        height_in_cm: None,
        mass_in_kg: None,
        hair_color: None,
        skin_color: None,
        eye_color: None,
        birthyear: None,
        gender: None,
        planet_id: planet_id.map(PlanetId),
    }
}

/// Create-payload for a vehicle
pub fn new_vehicle(name: &str) -> NewVehicle {
    NewVehicle {
        name: name.to_string(),
        url: format!("https://catalog.test/vehicles/{}", slug(name)),
        model: None,
        vehicle_class: None,
        manufacturer: None,
        cost_in_credits: None,
        length_in_m: None,
        crew: None,
        passengers: None,
        max_atmosphering_speed_in_kmh: None,
        cargo_capacity_in_kg: None,
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: format!("{}-secret", username),
    }
}
