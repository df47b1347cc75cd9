//! Catalog service
//!
//! Lists, looks up and creates characters, planets and vehicles, and links
//! characters to the vehicles they operate.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::{
    CharacterId, NewCharacter, NewCharacterVehicleLink, NewPlanet, NewVehicle, PlanetId, VehicleId,
};
use crate::domain::ports::{
    CharacterRepository, CharacterVehicleRepository, PlanetRepository, VehicleRepository,
};
use crate::domain::views::{CharacterVehicleLinkView, CharacterView, PlanetView, VehicleView};
use crate::error::{AppError, DomainError};

use super::CatalogSerializer;

/// Service for the catalog entities
pub struct CatalogService<CR, PR, VR, LR>
where
    CR: CharacterRepository,
    PR: PlanetRepository,
    VR: VehicleRepository,
    LR: CharacterVehicleRepository,
{
    characters: Arc<CR>,
    planets: Arc<PR>,
    vehicles: Arc<VR>,
    links: Arc<LR>,
    serializer: Arc<CatalogSerializer<CR, PR, VR, LR>>,
}

impl<CR, PR, VR, LR> CatalogService<CR, PR, VR, LR>
where
    CR: CharacterRepository,
    PR: PlanetRepository,
    VR: VehicleRepository,
    LR: CharacterVehicleRepository,
{
    pub fn new(
        characters: Arc<CR>,
        planets: Arc<PR>,
        vehicles: Arc<VR>,
        links: Arc<LR>,
        serializer: Arc<CatalogSerializer<CR, PR, VR, LR>>,
    ) -> Self {
        Self {
            characters,
            planets,
            vehicles,
            links,
            serializer,
        }
    }

    // ------------------------------------------------------------------
    // Planets
    // ------------------------------------------------------------------

    pub async fn list_planets(&self) -> Result<Vec<PlanetView>, AppError> {
        let planets = self.planets.find_all().await?;
        Ok(self.serializer.planets(planets).await?)
    }

    pub async fn get_planet(&self, id: &PlanetId) -> Result<Option<PlanetView>, AppError> {
        match self.planets.find_by_id(id).await? {
            Some(planet) => Ok(Some(self.serializer.planet(planet).await?)),
            None => Ok(None),
        }
    }

    /// Create one or more planets; nothing is stored unless every one is valid
    pub async fn create_planets(&self, batch: Vec<NewPlanet>) -> Result<Vec<PlanetView>, AppError> {
        require_items("planet", batch.len())?;
        for planet in &batch {
            planet.validate()?;
        }
        unique_within_batch("planet", batch.iter().map(|p| (p.name.as_str(), p.url.as_str())))?;
        for planet in &batch {
            if let Some(existing) = self
                .planets
                .find_by_name_or_url(&planet.name, &planet.url)
                .await?
            {
                return Err(already_exists("planet", &planet.name, &existing.name).into());
            }
        }

        let created = self.planets.create_many(&batch).await?;
        for planet in &created {
            tracing::info!(planet_id = %planet.id, name = %planet.name, "planet created");
        }

        Ok(self.serializer.planets(created).await?)
    }

    // ------------------------------------------------------------------
    // Characters
    // ------------------------------------------------------------------

    pub async fn list_characters(&self) -> Result<Vec<CharacterView>, AppError> {
        let characters = self.characters.find_all().await?;
        Ok(self.serializer.characters(characters).await?)
    }

    pub async fn get_character(&self, id: &CharacterId) -> Result<Option<CharacterView>, AppError> {
        match self.characters.find_by_id(id).await? {
            Some(character) => Ok(Some(self.serializer.character(character).await?)),
            None => Ok(None),
        }
    }

    /// Create one or more characters; nothing is stored unless every one is valid
    pub async fn create_characters(
        &self,
        batch: Vec<NewCharacter>,
    ) -> Result<Vec<CharacterView>, AppError> {
        require_items("character", batch.len())?;
        for character in &batch {
            character.validate()?;
        }
        unique_within_batch(
            "character",
            batch.iter().map(|c| (c.name.as_str(), c.url.as_str())),
        )?;
        for character in &batch {
            if let Some(existing) = self
                .characters
                .find_by_name_or_url(&character.name, &character.url)
                .await?
            {
                return Err(already_exists("character", &character.name, &existing.name).into());
            }
        }

        let mut planet_ids: Vec<PlanetId> = batch.iter().filter_map(|c| c.planet_id).collect();
        planet_ids.sort();
        planet_ids.dedup();
        let found = self.planets.find_by_ids(&planet_ids).await?;
        if let Some(missing) = planet_ids.iter().find(|id| !found.iter().any(|p| p.id == **id)) {
            return Err(DomainError::ConstraintViolation(format!(
                "planet {} does not exist",
                missing
            ))
            .into());
        }

        let created = self.characters.create_many(&batch).await?;
        for character in &created {
            tracing::info!(
                character_id = %character.id,
                name = %character.name,
                planet_id = ?character.planet_id.map(|id| id.0),
                "character created"
            );
        }

        Ok(self.serializer.characters(created).await?)
    }

    /// Vehicles operated by a character, or `None` if the character is unknown
    pub async fn get_character_vehicles(
        &self,
        id: &CharacterId,
    ) -> Result<Option<Vec<VehicleView>>, AppError> {
        if self.characters.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let linked: Vec<VehicleId> = self
            .links
            .find_by_character(id)
            .await?
            .into_iter()
            .map(|l| l.vehicle_id)
            .collect();

        let vehicles = self.vehicles.find_by_ids(&linked).await?;
        let views: HashMap<_, _> = self
            .serializer
            .vehicles(vehicles)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        // One entry per link, in link order, like the character's own `vehicles`
        Ok(Some(
            linked
                .iter()
                .filter_map(|vehicle_id| views.get(vehicle_id).cloned())
                .collect(),
        ))
    }

    /// Record that a character operates a vehicle
    pub async fn link_vehicle(
        &self,
        character_id: &CharacterId,
        vehicle_id: &VehicleId,
    ) -> Result<CharacterVehicleLinkView, AppError> {
        if self.characters.find_by_id(character_id).await?.is_none() {
            return Err(
                DomainError::NotFound(format!("Character {} not found", character_id)).into(),
            );
        }
        if self.vehicles.find_by_id(vehicle_id).await?.is_none() {
            return Err(DomainError::ConstraintViolation(format!(
                "vehicle {} does not exist",
                vehicle_id
            ))
            .into());
        }

        let link = self
            .links
            .create(&NewCharacterVehicleLink {
                character_id: *character_id,
                vehicle_id: *vehicle_id,
            })
            .await?;
        tracing::info!(
            link_id = %link.id,
            character_id = %link.character_id,
            vehicle_id = %link.vehicle_id,
            "vehicle linked to character"
        );

        Ok(self.serializer.link(&link).await?)
    }

    // ------------------------------------------------------------------
    // Vehicles
    // ------------------------------------------------------------------

    pub async fn list_vehicles(&self) -> Result<Vec<VehicleView>, AppError> {
        let vehicles = self.vehicles.find_all().await?;
        Ok(self.serializer.vehicles(vehicles).await?)
    }

    pub async fn get_vehicle(&self, id: &VehicleId) -> Result<Option<VehicleView>, AppError> {
        match self.vehicles.find_by_id(id).await? {
            Some(vehicle) => Ok(Some(self.serializer.vehicle(vehicle).await?)),
            None => Ok(None),
        }
    }

    /// Create one or more vehicles; nothing is stored unless every one is valid
    pub async fn create_vehicles(
        &self,
        batch: Vec<NewVehicle>,
    ) -> Result<Vec<VehicleView>, AppError> {
        require_items("vehicle", batch.len())?;
        for vehicle in &batch {
            vehicle.validate()?;
        }
        unique_within_batch("vehicle", batch.iter().map(|v| (v.name.as_str(), v.url.as_str())))?;
        for vehicle in &batch {
            if let Some(existing) = self
                .vehicles
                .find_by_name_or_url(&vehicle.name, &vehicle.url)
                .await?
            {
                return Err(already_exists("vehicle", &vehicle.name, &existing.name).into());
            }
        }

        let created = self.vehicles.create_many(&batch).await?;
        for vehicle in &created {
            tracing::info!(vehicle_id = %vehicle.id, name = %vehicle.name, "vehicle created");
        }

        Ok(self.serializer.vehicles(created).await?)
    }

    /// Characters operating a vehicle, or `None` if the vehicle is unknown
    pub async fn get_vehicle_characters(
        &self,
        id: &VehicleId,
    ) -> Result<Option<Vec<CharacterView>>, AppError> {
        if self.vehicles.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let linked: Vec<CharacterId> = self
            .links
            .find_by_vehicle(id)
            .await?
            .into_iter()
            .map(|l| l.character_id)
            .collect();

        let characters = self.characters.find_by_ids(&linked).await?;
        let views: HashMap<_, _> = self
            .serializer
            .characters(characters)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(Some(
            linked
                .iter()
                .filter_map(|character_id| views.get(character_id).cloned())
                .collect(),
        ))
    }
}

fn require_items(kind: &str, count: usize) -> Result<(), AppError> {
    if count == 0 {
        return Err(AppError::BadRequest(format!(
            "at least one {} is required",
            kind
        )));
    }
    Ok(())
}

/// Reject batches that repeat a name or url
fn unique_within_batch<'a>(
    kind: &str,
    keys: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), DomainError> {
    let mut names = HashSet::new();
    let mut urls = HashSet::new();
    for (name, url) in keys {
        if !names.insert(name) {
            return Err(DomainError::ConstraintViolation(format!(
                "{} name '{}' appears more than once in the request",
                kind, name
            )));
        }
        if !urls.insert(url) {
            return Err(DomainError::ConstraintViolation(format!(
                "{} url '{}' appears more than once in the request",
                kind, url
            )));
        }
    }
    Ok(())
}

fn already_exists(kind: &str, requested: &str, existing: &str) -> DomainError {
    if requested == existing {
        DomainError::ConstraintViolation(format!("{} '{}' already exists", kind, requested))
    } else {
        DomainError::ConstraintViolation(format!(
            "{} '{}' has the same url as existing {} '{}'",
            kind, requested, kind, existing
        ))
    }
}
