use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(240))")]
    pub url: String,
    #[sea_orm(column_type = "String(StringLen::N(150))", nullable)]
    pub model: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(150))", nullable)]
    pub vehicle_class: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(150))", nullable)]
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length_in_m: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed_in_kmh: Option<f64>,
    pub cargo_capacity_in_kg: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
