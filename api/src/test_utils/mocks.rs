//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Rows are kept in id order and ids are assigned like a database sequence.
//! Unique keys are enforced, and batch creates are all-or-nothing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Character, CharacterId, CharacterVehicleLink, CharacterVehicleLinkId, Favorite, FavoriteId,
    NewCharacter, NewCharacterVehicleLink, NewFavorite, NewPlanet, NewUser, NewVehicle, Planet,
    PlanetId, User, UserId, Vehicle, VehicleId,
};
use crate::domain::ports::{
    CharacterRepository, CharacterVehicleRepository, FavoriteRepository, PlanetRepository,
    UserRepository, VehicleRepository,
};
use crate::error::DomainError;

/// Next sequence value after the highest stored id
fn next_id<K, V>(rows: &BTreeMap<K, V>, raw: impl Fn(&K) -> i32) -> i32 {
    rows.keys().next_back().map(|k| raw(k) + 1).unwrap_or(1)
}

fn unique_violation(kind: &str, name: &str) -> DomainError {
    DomainError::ConstraintViolation(format!("{} '{}' already exists", kind, name))
}

// ============================================================================
// In-Memory Planet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPlanetRepository {
    planets: Arc<RwLock<BTreeMap<PlanetId, Planet>>>,
}

impl InMemoryPlanetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a planet for testing
    pub fn with_planet(self, planet: Planet) -> Self {
        self.planets.write().unwrap().insert(planet.id, planet);
        self
    }
}

#[async_trait]
impl PlanetRepository for InMemoryPlanetRepository {
    async fn find_by_id(&self, id: &PlanetId) -> Result<Option<Planet>, DomainError> {
        Ok(self.planets.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Planet>, DomainError> {
        Ok(self.planets.read().unwrap().values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, DomainError> {
        let planets = self.planets.read().unwrap();
        Ok(planets
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Planet>, DomainError> {
        let planets = self.planets.read().unwrap();
        Ok(planets
            .values()
            .find(|p| p.name == name || p.url == url)
            .cloned())
    }

    async fn create_many(&self, batch: &[NewPlanet]) -> Result<Vec<Planet>, DomainError> {
        let mut planets = self.planets.write().unwrap();
        let mut staged = planets.clone();
        let mut created = Vec::with_capacity(batch.len());

        for new_planet in batch {
            if staged
                .values()
                .any(|p| p.name == new_planet.name || p.url == new_planet.url)
            {
                return Err(unique_violation("planet", &new_planet.name));
            }

            let planet = Planet {
                id: PlanetId(next_id(&staged, |id| id.0)),
                name: new_planet.name.clone(),
                url: new_planet.url.clone(),
                diameter_in_km: new_planet.diameter_in_km,
                rotation_period_in_days: new_planet.rotation_period_in_days,
                orbital_period_in_days: new_planet.orbital_period_in_days,
                gravity_in_g: new_planet.gravity_in_g,
                population: new_planet.population,
                climate: new_planet.climate.clone(),
                terrain: new_planet.terrain.clone(),
                surface_water_percent: new_planet.surface_water_percent,
            };
            staged.insert(planet.id, planet.clone());
            created.push(planet);
        }

        *planets = staged;
        Ok(created)
    }
}

// ============================================================================
// In-Memory Character Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: Arc<RwLock<BTreeMap<CharacterId, Character>>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a character for testing
    pub fn with_character(self, character: Character) -> Self {
        self.characters
            .write()
            .unwrap()
            .insert(character.id, character);
        self
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError> {
        Ok(self.characters.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        Ok(self.characters.read().unwrap().values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &[CharacterId]) -> Result<Vec<Character>, DomainError> {
        let characters = self.characters.read().unwrap();
        Ok(characters
            .values()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn find_by_planets(
        &self,
        planet_ids: &[PlanetId],
    ) -> Result<Vec<Character>, DomainError> {
        let characters = self.characters.read().unwrap();
        Ok(characters
            .values()
            .filter(|c| c.planet_id.is_some_and(|id| planet_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Character>, DomainError> {
        let characters = self.characters.read().unwrap();
        Ok(characters
            .values()
            .find(|c| c.name == name || c.url == url)
            .cloned())
    }

    async fn create_many(&self, batch: &[NewCharacter]) -> Result<Vec<Character>, DomainError> {
        let mut characters = self.characters.write().unwrap();
        let mut staged = characters.clone();
        let mut created = Vec::with_capacity(batch.len());

        for new_character in batch {
            if staged
                .values()
                .any(|c| c.name == new_character.name || c.url == new_character.url)
            {
                return Err(unique_violation("character", &new_character.name));
            }

            let character = Character {
                id: CharacterId(next_id(&staged, |id| id.0)),
                name: new_character.name.clone(),
                url: new_character.url.clone(),
                height_in_cm: new_character.height_in_cm,
                mass_in_kg: new_character.mass_in_kg,
                hair_color: new_character.hair_color.clone(),
                skin_color: new_character.skin_color.clone(),
                eye_color: new_character.eye_color.clone(),
                birthyear: new_character.birthyear.clone(),
                gender: new_character.gender.clone(),
                planet_id: new_character.planet_id,
            };
            staged.insert(character.id, character.clone());
            created.push(character);
        }

        *characters = staged;
        Ok(created)
    }
}

// ============================================================================
// In-Memory Vehicle Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<BTreeMap<VehicleId, Vehicle>>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a vehicle for testing
    pub fn with_vehicle(self, vehicle: Vehicle) -> Self {
        self.vehicles.write().unwrap().insert(vehicle.id, vehicle);
        self
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError> {
        Ok(self.vehicles.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        Ok(self.vehicles.read().unwrap().values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &[VehicleId]) -> Result<Vec<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().unwrap();
        Ok(vehicles
            .values()
            .filter(|v| ids.contains(&v.id))
            .cloned()
            .collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().unwrap();
        Ok(vehicles
            .values()
            .find(|v| v.name == name || v.url == url)
            .cloned())
    }

    async fn create_many(&self, batch: &[NewVehicle]) -> Result<Vec<Vehicle>, DomainError> {
        let mut vehicles = self.vehicles.write().unwrap();
        let mut staged = vehicles.clone();
        let mut created = Vec::with_capacity(batch.len());

        for new_vehicle in batch {
            if staged
                .values()
                .any(|v| v.name == new_vehicle.name || v.url == new_vehicle.url)
            {
                return Err(unique_violation("vehicle", &new_vehicle.name));
            }

            let vehicle = Vehicle {
                id: VehicleId(next_id(&staged, |id| id.0)),
                name: new_vehicle.name.clone(),
                url: new_vehicle.url.clone(),
                model: new_vehicle.model.clone(),
                vehicle_class: new_vehicle.vehicle_class.clone(),
                manufacturer: new_vehicle.manufacturer.clone(),
                cost_in_credits: new_vehicle.cost_in_credits,
                length_in_m: new_vehicle.length_in_m,
                crew: new_vehicle.crew,
                passengers: new_vehicle.passengers,
                max_atmosphering_speed_in_kmh: new_vehicle.max_atmosphering_speed_in_kmh,
                cargo_capacity_in_kg: new_vehicle.cargo_capacity_in_kg,
            };
            staged.insert(vehicle.id, vehicle.clone());
            created.push(vehicle);
        }

        *vehicles = staged;
        Ok(created)
    }
}

// ============================================================================
// In-Memory Character-Vehicle Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCharacterVehicleRepository {
    links: Arc<RwLock<BTreeMap<CharacterVehicleLinkId, CharacterVehicleLink>>>,
}

impl InMemoryCharacterVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a link between two ids; neither end has to exist
    pub fn with_link(self, character_id: i32, vehicle_id: i32) -> Self {
        {
            let mut links = self.links.write().unwrap();
            let link = CharacterVehicleLink {
                id: CharacterVehicleLinkId(next_id(&*links, |id| id.0)),
                character_id: CharacterId(character_id),
                vehicle_id: VehicleId(vehicle_id),
            };
            links.insert(link.id, link);
        }
        self
    }
}

#[async_trait]
impl CharacterVehicleRepository for InMemoryCharacterVehicleRepository {
    async fn find_by_character(
        &self,
        character_id: &CharacterId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let links = self.links.read().unwrap();
        Ok(links
            .values()
            .filter(|l| l.character_id == *character_id)
            .copied()
            .collect())
    }

    async fn find_by_vehicle(
        &self,
        vehicle_id: &VehicleId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let links = self.links.read().unwrap();
        Ok(links
            .values()
            .filter(|l| l.vehicle_id == *vehicle_id)
            .copied()
            .collect())
    }

    async fn find_by_characters(
        &self,
        character_ids: &[CharacterId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let links = self.links.read().unwrap();
        Ok(links
            .values()
            .filter(|l| character_ids.contains(&l.character_id))
            .copied()
            .collect())
    }

    async fn find_by_vehicles(
        &self,
        vehicle_ids: &[VehicleId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let links = self.links.read().unwrap();
        Ok(links
            .values()
            .filter(|l| vehicle_ids.contains(&l.vehicle_id))
            .copied()
            .collect())
    }

    async fn create(
        &self,
        new_link: &NewCharacterVehicleLink,
    ) -> Result<CharacterVehicleLink, DomainError> {
        let mut links = self.links.write().unwrap();
        let link = CharacterVehicleLink {
            id: CharacterVehicleLinkId(next_id(&*links, |id| id.0)),
            character_id: new_link.character_id,
            vehicle_id: new_link.vehicle_id,
        };
        links.insert(link.id, link);
        Ok(link)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().unwrap().values().cloned().collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.username == new_user.username) {
            return Err(unique_violation("user", &new_user.username));
        }

        let user = User {
            id: UserId(next_id(&*users, |id| id.0)),
            username: new_user.username.clone(),
            password: new_user.password.clone(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

// ============================================================================
// In-Memory Favorite Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryFavoriteRepository {
    favorites: Arc<RwLock<BTreeMap<FavoriteId, Favorite>>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a favorite, including ones with no target
    pub fn with_favorite(self, favorite: Favorite) -> Self {
        self.favorites.write().unwrap().insert(favorite.id, favorite);
        self
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, DomainError> {
        let favorites = self.favorites.read().unwrap();
        Ok(favorites
            .values()
            .filter(|f| f.user_id == *user_id)
            .copied()
            .collect())
    }

    async fn create(&self, new_favorite: &NewFavorite) -> Result<Favorite, DomainError> {
        let mut favorites = self.favorites.write().unwrap();
        let favorite = Favorite {
            id: FavoriteId(next_id(&*favorites, |id| id.0)),
            user_id: new_favorite.user_id,
            target: Some(new_favorite.target),
        };
        favorites.insert(favorite.id, favorite);
        Ok(favorite)
    }
}
