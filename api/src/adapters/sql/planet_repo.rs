//! SQL adapter for PlanetRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::db_error;
use crate::domain::entities::{NewPlanet, Planet, PlanetId};
use crate::domain::ports::PlanetRepository;
use crate::entity::planets;
use crate::error::DomainError;

/// SeaORM implementation of PlanetRepository
pub struct SqlPlanetRepository {
    db: DatabaseConnection,
}

impl SqlPlanetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanetRepository for SqlPlanetRepository {
    async fn find_by_id(&self, id: &PlanetId) -> Result<Option<Planet>, DomainError> {
        let result = planets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Planet>, DomainError> {
        let results = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let results = planets::Entity::find()
            .filter(planets::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(planets::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Planet>, DomainError> {
        let result = planets::Entity::find()
            .filter(
                Condition::any()
                    .add(planets::Column::Name.eq(name))
                    .add(planets::Column::Url.eq(url)),
            )
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create_many(&self, batch: &[NewPlanet]) -> Result<Vec<Planet>, DomainError> {
        let txn = self.db.begin().await.map_err(db_error)?;
        let mut created = Vec::with_capacity(batch.len());

        for planet in batch {
            let model = planets::ActiveModel {
                name: Set(planet.name.clone()),
                url: Set(planet.url.clone()),
                diameter_in_km: Set(planet.diameter_in_km),
                rotation_period_in_days: Set(planet.rotation_period_in_days),
                orbital_period_in_days: Set(planet.orbital_period_in_days),
                gravity_in_g: Set(planet.gravity_in_g),
                population: Set(planet.population),
                climate: Set(planet.climate.clone()),
                terrain: Set(planet.terrain.clone()),
                surface_water_percent: Set(planet.surface_water_percent),
                ..Default::default()
            };

            // Dropping the transaction on error rolls it back
            let result = model.insert(&txn).await.map_err(db_error)?;
            created.push(result.into());
        }

        txn.commit().await.map_err(db_error)?;
        Ok(created)
    }
}

/// Convert SeaORM model to domain entity
impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Planet {
            id: PlanetId(model.id),
            name: model.name,
            url: model.url,
            diameter_in_km: model.diameter_in_km,
            rotation_period_in_days: model.rotation_period_in_days,
            orbital_period_in_days: model.orbital_period_in_days,
            gravity_in_g: model.gravity_in_g,
            population: model.population,
            climate: model.climate,
            terrain: model.terrain,
            surface_water_percent: model.surface_water_percent,
        }
    }
}
