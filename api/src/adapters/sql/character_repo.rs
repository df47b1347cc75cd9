//! SQL adapter for CharacterRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::db_error;
use crate::domain::entities::{Character, CharacterId, NewCharacter, PlanetId};
use crate::domain::ports::CharacterRepository;
use crate::entity::characters;
use crate::error::DomainError;

/// SeaORM implementation of CharacterRepository
pub struct SqlCharacterRepository {
    db: DatabaseConnection,
}

impl SqlCharacterRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CharacterRepository for SqlCharacterRepository {
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError> {
        let result = characters::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        let results = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_ids(&self, ids: &[CharacterId]) -> Result<Vec<Character>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let results = characters::Entity::find()
            .filter(characters::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(characters::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_planets(
        &self,
        planet_ids: &[PlanetId],
    ) -> Result<Vec<Character>, DomainError> {
        if planet_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = characters::Entity::find()
            .filter(characters::Column::PlanetId.is_in(planet_ids.iter().map(|id| id.0)))
            .order_by_asc(characters::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name_or_url(
        &self,
        name: &str,
        url: &str,
    ) -> Result<Option<Character>, DomainError> {
        let result = characters::Entity::find()
            .filter(
                Condition::any()
                    .add(characters::Column::Name.eq(name))
                    .add(characters::Column::Url.eq(url)),
            )
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create_many(&self, batch: &[NewCharacter]) -> Result<Vec<Character>, DomainError> {
        let txn = self.db.begin().await.map_err(db_error)?;
        let mut created = Vec::with_capacity(batch.len());

        for character in batch {
            let model = characters::ActiveModel {
                name: Set(character.name.clone()),
                url: Set(character.url.clone()),
                height_in_cm: Set(character.height_in_cm),
                mass_in_kg: Set(character.mass_in_kg),
                hair_color: Set(character.hair_color.clone()),
                skin_color: Set(character.skin_color.clone()),
                eye_color: Set(character.eye_color.clone()),
                birthyear: Set(character.birthyear.clone()),
                gender: Set(character.gender.clone()),
                planet_id: Set(character.planet_id.map(|id| id.0)),
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
impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Character {
            id: CharacterId(model.id),
            name: model.name,
            url: model.url,
            height_in_cm: model.height_in_cm,
            mass_in_kg: model.mass_in_kg,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            birthyear: model.birthyear,
            gender: model.gender,
            planet_id: model.planet_id.map(PlanetId),
        }
    }
}
