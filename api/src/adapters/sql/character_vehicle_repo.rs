//! SQL adapter for CharacterVehicleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_error;
use crate::domain::entities::{
    CharacterId, CharacterVehicleLink, CharacterVehicleLinkId, NewCharacterVehicleLink, VehicleId,
};
use crate::domain::ports::CharacterVehicleRepository;
use crate::entity::character_vehicles;
use crate::error::DomainError;

/// SeaORM implementation of CharacterVehicleRepository
pub struct SqlCharacterVehicleRepository {
    db: DatabaseConnection,
}

impl SqlCharacterVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CharacterVehicleRepository for SqlCharacterVehicleRepository {
    async fn find_by_character(
        &self,
        character_id: &CharacterId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let results = character_vehicles::Entity::find()
            .filter(character_vehicles::Column::CharacterId.eq(character_id.0))
            .order_by_asc(character_vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_vehicle(
        &self,
        vehicle_id: &VehicleId,
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        let results = character_vehicles::Entity::find()
            .filter(character_vehicles::Column::VehicleId.eq(vehicle_id.0))
            .order_by_asc(character_vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_characters(
        &self,
        character_ids: &[CharacterId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        if character_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = character_vehicles::Entity::find()
            .filter(
                character_vehicles::Column::CharacterId.is_in(character_ids.iter().map(|id| id.0)),
            )
            .order_by_asc(character_vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_vehicles(
        &self,
        vehicle_ids: &[VehicleId],
    ) -> Result<Vec<CharacterVehicleLink>, DomainError> {
        if vehicle_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = character_vehicles::Entity::find()
            .filter(character_vehicles::Column::VehicleId.is_in(vehicle_ids.iter().map(|id| id.0)))
            .order_by_asc(character_vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(
        &self,
        link: &NewCharacterVehicleLink,
    ) -> Result<CharacterVehicleLink, DomainError> {
        let model = character_vehicles::ActiveModel {
            character_id: Set(link.character_id.0),
            vehicle_id: Set(link.vehicle_id.0),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error)?;

        Ok(result.into())
    }
}

impl From<character_vehicles::Model> for CharacterVehicleLink {
    fn from(model: character_vehicles::Model) -> Self {
        CharacterVehicleLink {
            id: CharacterVehicleLinkId(model.id),
            character_id: CharacterId(model.character_id),
            vehicle_id: VehicleId(model.vehicle_id),
        }
    }
}
