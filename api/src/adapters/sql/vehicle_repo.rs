//! SQL adapter for VehicleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::db_error;
use crate::domain::entities::{NewVehicle, Vehicle, VehicleId};
use crate::domain::ports::VehicleRepository;
use crate::entity::vehicles;
use crate::error::DomainError;

/// SeaORM implementation of VehicleRepository
pub struct SqlVehicleRepository {
    db: DatabaseConnection,
}

impl SqlVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SqlVehicleRepository {
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        let results = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_ids(&self, ids: &[VehicleId]) -> Result<Vec<Vehicle>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let results = vehicles::Entity::find()
            .filter(vehicles::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find()
            .filter(
                Condition::any()
                    .add(vehicles::Column::Name.eq(name))
                    .add(vehicles::Column::Url.eq(url)),
            )
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create_many(&self, batch: &[NewVehicle]) -> Result<Vec<Vehicle>, DomainError> {
        let txn = self.db.begin().await.map_err(db_error)?;
        let mut created = Vec::with_capacity(batch.len());

        for vehicle in batch {
            let model = vehicles::ActiveModel {
                name: Set(vehicle.name.clone()),
                url: Set(vehicle.url.clone()),
                model: Set(vehicle.model.clone()),
                vehicle_class: Set(vehicle.vehicle_class.clone()),
                manufacturer: Set(vehicle.manufacturer.clone()),
                cost_in_credits: Set(vehicle.cost_in_credits),
                length_in_m: Set(vehicle.length_in_m),
                crew: Set(vehicle.crew),
                passengers: Set(vehicle.passengers),
                max_atmosphering_speed_in_kmh: Set(vehicle.max_atmosphering_speed_in_kmh),
                cargo_capacity_in_kg: Set(vehicle.cargo_capacity_in_kg),
                ..Default::default()
            };

            let result = model.insert(&txn).await.map_err(db_error)?;
            created.push(result.into());
        }

        txn.commit().await.map_err(db_error)?;
        Ok(created)
    }
}

/// Convert SeaORM model to domain entity
impl From<vehicles::Model> for Vehicle {
    fn from(model: vehicles::Model) -> Self {
        Vehicle {
            id: VehicleId(model.id),
            name: model.name,
            url: model.url,
            model: model.model,
            vehicle_class: model.vehicle_class,
            manufacturer: model.manufacturer,
            cost_in_credits: model.cost_in_credits,
            length_in_m: model.length_in_m,
            crew: model.crew,
            passengers: model.passengers,
            max_atmosphering_speed_in_kmh: model.max_atmosphering_speed_in_kmh,
            cargo_capacity_in_kg: model.cargo_capacity_in_kg,
        }
    }
}
