//! Schema bootstrap
//!
//! Tables are created from the entity definitions rather than from migration
//! files. Creation is idempotent.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{character_vehicles, characters, favorites, planets, users, vehicles};

/// Create every table that does not exist yet, parents before children
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, users::Entity).await?;
    create_table(db, planets::Entity).await?;
    create_table(db, characters::Entity).await?;
    create_table(db, vehicles::Entity).await?;
    create_table(db, character_vehicles::Entity).await?;
    create_table(db, favorites::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    tracing::debug!(table = %entity.table_name(), "ensuring table");
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
