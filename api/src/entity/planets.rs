use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
    pub name: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(240))")]
    pub url: String,
    pub diameter_in_km: Option<f64>,
    pub rotation_period_in_days: Option<f64>,
    pub orbital_period_in_days: Option<f64>,
    pub gravity_in_g: Option<f64>,
    pub population: Option<i64>,
    #[sea_orm(column_type = "String(StringLen::N(240))", nullable)]
    pub climate: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(240))", nullable)]
    pub terrain: Option<String>,
    pub surface_water_percent: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
