//! Catalog serializer
//!
//! Loads the associations of catalog entities and assembles their views.
//! The associations of a whole list are loaded with one lookup per kind, and
//! each edge is rendered as a shallow [`EntityRef`], so a view never nests
//! deeper than one level no matter how the character/vehicle graph is shaped.
//!
//! References that no longer resolve are rendered as `null` and logged.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    Character, CharacterId, CharacterVehicleLink, Favorite, FavoriteTarget, Planet, PlanetId,
    Vehicle, VehicleId,
};
use crate::domain::ports::{
    CharacterRepository, CharacterVehicleRepository, PlanetRepository, VehicleRepository,
};
use crate::domain::views::{
    CharacterVehicleLinkView, CharacterView, EntityRef, FavoriteSubject, FavoriteView, PlanetView,
    VehicleView,
};
use crate::error::DomainError;

/// Builds views for catalog entities
pub struct CatalogSerializer<CR, PR, VR, LR>
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
}

impl<CR, PR, VR, LR> CatalogSerializer<CR, PR, VR, LR>
where
    CR: CharacterRepository,
    PR: PlanetRepository,
    VR: VehicleRepository,
    LR: CharacterVehicleRepository,
{
    pub fn new(characters: Arc<CR>, planets: Arc<PR>, vehicles: Arc<VR>, links: Arc<LR>) -> Self {
        Self {
            characters,
            planets,
            vehicles,
            links,
        }
    }

    pub async fn planet(&self, planet: Planet) -> Result<PlanetView, DomainError> {
        let mut views = self.planets(vec![planet]).await?;
        views
            .pop()
            .ok_or_else(|| DomainError::Internal("planet view was not built".to_string()))
    }

    pub async fn planets(&self, planets: Vec<Planet>) -> Result<Vec<PlanetView>, DomainError> {
        let planet_ids: Vec<_> = planets.iter().map(|p| p.id).collect();
        let mut natives: HashMap<PlanetId, Vec<EntityRef>> = HashMap::new();
        for character in self.characters.find_by_planets(&planet_ids).await? {
            if let Some(planet_id) = character.planet_id {
                natives
                    .entry(planet_id)
                    .or_default()
                    .push(EntityRef::from(&character));
            }
        }

        Ok(planets
            .into_iter()
            .map(|planet| {
                let refs = natives.remove(&planet.id).unwrap_or_default();
                PlanetView::new(planet, refs)
            })
            .collect())
    }

    pub async fn character(&self, character: Character) -> Result<CharacterView, DomainError> {
        let mut views = self.characters(vec![character]).await?;
        views
            .pop()
            .ok_or_else(|| DomainError::Internal("character view was not built".to_string()))
    }

    pub async fn characters(
        &self,
        characters: Vec<Character>,
    ) -> Result<Vec<CharacterView>, DomainError> {
        let mut planet_ids: Vec<_> = characters.iter().filter_map(|c| c.planet_id).collect();
        planet_ids.sort();
        planet_ids.dedup();
        let planets: HashMap<_, _> = self
            .planets
            .find_by_ids(&planet_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, EntityRef::from(&p)))
            .collect();

        let character_ids: Vec<_> = characters.iter().map(|c| c.id).collect();
        let links = self.links.find_by_characters(&character_ids).await?;
        let mut links_by_character: HashMap<CharacterId, Vec<CharacterVehicleLink>> =
            HashMap::new();
        for link in &links {
            links_by_character
                .entry(link.character_id)
                .or_default()
                .push(*link);
        }

        let mut vehicle_ids: Vec<_> = links.iter().map(|l| l.vehicle_id).collect();
        vehicle_ids.sort();
        vehicle_ids.dedup();
        let vehicles: HashMap<_, _> = self
            .vehicles
            .find_by_ids(&vehicle_ids)
            .await?
            .into_iter()
            .map(|v| (v.id, EntityRef::from(&v)))
            .collect();

        let views = characters
            .into_iter()
            .map(|character| {
                let links = links_by_character.remove(&character.id).unwrap_or_default();
                let own = EntityRef::from(&character);
                let planet = character.planet_id.and_then(|planet_id| {
                    let planet = planets.get(&planet_id).cloned();
                    if planet.is_none() {
                        tracing::warn!(
                            character_id = %character.id,
                            planet_id = %planet_id,
                            "character references a missing planet"
                        );
                    }
                    planet
                });
                let link_views = links
                    .iter()
                    .map(|link| {
                        let vehicle = vehicles.get(&link.vehicle_id).cloned();
                        if vehicle.is_none() {
                            warn_dangling(link, "vehicle");
                        }
                        CharacterVehicleLinkView::new(link, Some(own.clone()), vehicle)
                    })
                    .collect();
                CharacterView::new(character, planet, link_views)
            })
            .collect();

        Ok(views)
    }

    pub async fn vehicle(&self, vehicle: Vehicle) -> Result<VehicleView, DomainError> {
        let mut views = self.vehicles(vec![vehicle]).await?;
        views
            .pop()
            .ok_or_else(|| DomainError::Internal("vehicle view was not built".to_string()))
    }

    pub async fn vehicles(&self, vehicles: Vec<Vehicle>) -> Result<Vec<VehicleView>, DomainError> {
        let vehicle_ids: Vec<_> = vehicles.iter().map(|v| v.id).collect();
        let links = self.links.find_by_vehicles(&vehicle_ids).await?;
        let mut links_by_vehicle: HashMap<VehicleId, Vec<CharacterVehicleLink>> = HashMap::new();
        for link in &links {
            links_by_vehicle.entry(link.vehicle_id).or_default().push(*link);
        }

        let mut character_ids: Vec<_> = links.iter().map(|l| l.character_id).collect();
        character_ids.sort();
        character_ids.dedup();
        let characters: HashMap<_, _> = self
            .characters
            .find_by_ids(&character_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, EntityRef::from(&c)))
            .collect();

        let views = vehicles
            .into_iter()
            .map(|vehicle| {
                let links = links_by_vehicle.remove(&vehicle.id).unwrap_or_default();
                let own = EntityRef::from(&vehicle);
                let link_views = links
                    .iter()
                    .map(|link| {
                        let character = characters.get(&link.character_id).cloned();
                        if character.is_none() {
                            warn_dangling(link, "character");
                        }
                        CharacterVehicleLinkView::new(link, character, Some(own.clone()))
                    })
                    .collect();
                VehicleView::new(vehicle, link_views)
            })
            .collect();

        Ok(views)
    }

    /// View of a single link with both ends resolved
    pub async fn link(
        &self,
        link: &CharacterVehicleLink,
    ) -> Result<CharacterVehicleLinkView, DomainError> {
        let character = self.characters.find_by_id(&link.character_id).await?;
        let vehicle = self.vehicles.find_by_id(&link.vehicle_id).await?;
        if character.is_none() {
            warn_dangling(link, "character");
        }
        if vehicle.is_none() {
            warn_dangling(link, "vehicle");
        }

        Ok(CharacterVehicleLinkView::new(
            link,
            character.as_ref().map(EntityRef::from),
            vehicle.as_ref().map(EntityRef::from),
        ))
    }

    pub async fn favorite(&self, favorite: &Favorite) -> Result<FavoriteView, DomainError> {
        let subject = match favorite.target {
            Some(target) => {
                let subject = self.favorite_subject(target).await?;
                if subject.is_none() {
                    tracing::warn!(
                        favorite_id = %favorite.id,
                        target = %target,
                        "favorite references a missing item"
                    );
                }
                subject
            }
            None => None,
        };
        Ok(FavoriteView::new(favorite, subject))
    }

    pub async fn favorites(
        &self,
        favorites: &[Favorite],
    ) -> Result<Vec<FavoriteView>, DomainError> {
        let mut views = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            views.push(self.favorite(favorite).await?);
        }
        Ok(views)
    }

    /// Whether the item a favorite points at is stored
    pub async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DomainError> {
        let exists = match target {
            FavoriteTarget::Character(id) => self.characters.find_by_id(&id).await?.is_some(),
            FavoriteTarget::Planet(id) => self.planets.find_by_id(&id).await?.is_some(),
            FavoriteTarget::Vehicle(id) => self.vehicles.find_by_id(&id).await?.is_some(),
        };
        Ok(exists)
    }

    /// Full view of the item a favorite points at, if it still exists
    async fn favorite_subject(
        &self,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteSubject>, DomainError> {
        let subject = match target {
            FavoriteTarget::Character(id) => match self.characters.find_by_id(&id).await? {
                Some(character) => Some(FavoriteSubject::Character(Box::new(
                    self.character(character).await?,
                ))),
                None => None,
            },
            FavoriteTarget::Planet(id) => match self.planets.find_by_id(&id).await? {
                Some(planet) => Some(FavoriteSubject::Planet(Box::new(self.planet(planet).await?))),
                None => None,
            },
            FavoriteTarget::Vehicle(id) => match self.vehicles.find_by_id(&id).await? {
                Some(vehicle) => Some(FavoriteSubject::Vehicle(Box::new(
                    self.vehicle(vehicle).await?,
                ))),
                None => None,
            },
        };
        Ok(subject)
    }
}

fn warn_dangling(link: &CharacterVehicleLink, missing: &str) {
    tracing::warn!(
        link_id = %link.id,
        character_id = %link.character_id,
        vehicle_id = %link.vehicle_id,
        missing,
        "character-vehicle link references a missing row"
    );
}
