//! Vehicle domain entity

use serde::Deserialize;

use crate::domain::validation;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a vehicle
    VehicleId
}

/// A vehicle of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub url: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length_in_m: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed_in_kmh: Option<f64>,
    pub cargo_capacity_in_kg: Option<f64>,
}

/// Data needed to create a new vehicle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewVehicle {
    pub name: String,
    pub url: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length_in_m: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed_in_kmh: Option<f64>,
    pub cargo_capacity_in_kg: Option<f64>,
}

impl NewVehicle {
    pub fn validate(&self) -> Result<(), DomainError> {
        validation::required_text("name", &self.name, 150)?;
        validation::reference_url("url", &self.url, 240)?;
        validation::optional_text("model", self.model.as_deref(), 150)?;
        validation::optional_text("vehicle_class", self.vehicle_class.as_deref(), 150)?;
        validation::optional_text("manufacturer", self.manufacturer.as_deref(), 150)?;
        validation::non_negative("cost_in_credits", self.cost_in_credits)?;
        validation::non_negative("length_in_m", self.length_in_m)?;
        validation::count("crew", self.crew)?;
        validation::count("passengers", self.passengers)?;
        validation::non_negative(
            "max_atmosphering_speed_in_kmh",
            self.max_atmosphering_speed_in_kmh,
        )?;
        validation::non_negative("cargo_capacity_in_kg", self.cargo_capacity_in_kg)?;
        Ok(())
    }
}
