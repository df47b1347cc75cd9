//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over PostgreSQL or SQLite).
//!
//! Lookups by id return `Ok(None)` when no row matches; list operations return
//! rows in ascending id order. Link lists are ordered by link id.

use async_trait::async_trait;

use crate::domain::entities::{
    Character, CharacterId, CharacterVehicleLink, Favorite, NewCharacter,
    NewCharacterVehicleLink, NewFavorite, NewPlanet, NewUser, NewVehicle, Planet, PlanetId, User,
    UserId, Vehicle, VehicleId,
};
use crate::error::DomainError;

/// Repository for Planet entities
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Find a planet by ID
    async fn find_by_id(&self, id: &PlanetId) -> Result<Option<Planet>, DomainError>;

    /// List every planet
    async fn find_all(&self) -> Result<Vec<Planet>, DomainError>;

    /// Find the planets among `ids` that exist
    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, DomainError>;

    /// Find a planet holding either unique key
    async fn find_by_name_or_url(&self, name: &str, url: &str)
        -> Result<Option<Planet>, DomainError>;

    /// Insert a batch of planets; all rows are committed or none are
    async fn create_many(&self, planets: &[NewPlanet]) -> Result<Vec<Planet>, DomainError>;
}

/// Repository for Character entities
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find a character by ID
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError>;

    /// List every character
    async fn find_all(&self) -> Result<Vec<Character>, DomainError>;

    /// Find the characters among `ids` that exist
    async fn find_by_ids(&self, ids: &[CharacterId]) -> Result<Vec<Character>, DomainError>;

    /// Find characters whose home planet is any of `planet_ids`
    async fn find_by_planets(&self, planet_ids: &[PlanetId])
        -> Result<Vec<Character>, DomainError>;

    /// Find a character holding either unique key
    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Character>, DomainError>;

    /// Insert a batch of characters; all rows are committed or none are
    async fn create_many(&self, characters: &[NewCharacter])
        -> Result<Vec<Character>, DomainError>;
}

/// Repository for Vehicle entities
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find a vehicle by ID
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError>;

    /// List every vehicle
    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Find the vehicles among `ids` that exist
    async fn find_by_ids(&self, ids: &[VehicleId]) -> Result<Vec<Vehicle>, DomainError>;

    /// Find a vehicle holding either unique key
    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Vehicle>, DomainError>;

    /// Insert a batch of vehicles; all rows are committed or none are
    async fn create_many(&self, vehicles: &[NewVehicle]) -> Result<Vec<Vehicle>, DomainError>;
}

/// Repository for the character-vehicle join entity
#[async_trait]
pub trait CharacterVehicleRepository: Send + Sync {
    /// Links whose character is `character_id`
    async fn find_by_character(
        &self,
        character_id: &CharacterId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError>;

    /// Links whose vehicle is `vehicle_id`
    async fn find_by_vehicle(
        &self,
        vehicle_id: &VehicleId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError>;

    /// Links whose character is any of `character_ids`
    async fn find_by_characters(
        &self,
        character_ids: &[CharacterId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError>;

    /// Links whose vehicle is any of `vehicle_ids`
    async fn find_by_vehicles(
        &self,
        vehicle_ids: &[VehicleId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError>;

    /// Create a new link
    async fn create(
        &self,
        link: &NewCharacterVehicleLink,
    ) -> Result<CharacterVehicleLink, DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List every user
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for Favorite entities
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites owned by `user_id`
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, DomainError>;

    /// Create a new favorite
    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, DomainError>;
}
