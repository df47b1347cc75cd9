//! SQL adapter for FavoriteRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_error;
use crate::domain::entities::{Favorite, FavoriteId, FavoriteTarget, NewFavorite, UserId};
use crate::domain::ports::FavoriteRepository;
use crate::entity::favorites;
use crate::error::DomainError;

/// SeaORM implementation of FavoriteRepository
pub struct SqlFavoriteRepository {
    db: DatabaseConnection,
}

impl SqlFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for SqlFavoriteRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, DomainError> {
        let results = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id.0))
            .order_by_asc(favorites::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, DomainError> {
        let target = favorite.target;
        let model = favorites::ActiveModel {
            user_id: Set(favorite.user_id.0),
            character_id: Set(target.character_id().map(|id| id.0)),
            planet_id: Set(target.planet_id().map(|id| id.0)),
            vehicle_id: Set(target.vehicle_id().map(|id| id.0)),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error)?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Favorite {
            id: FavoriteId(model.id),
            user_id: UserId(model.user_id),
            target: FavoriteTarget::from_columns(
                model.character_id,
                model.planet_id,
                model.vehicle_id,
            ),
        }
    }
}
