use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(240))")]
    pub url: String,
    pub height_in_cm: Option<f64>,
    pub mass_in_kg: Option<f64>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub skin_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub eye_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub birthyear: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub gender: Option<String>,
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_delete = "SetNull"
    )]
    Planet,
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
