//! Planet domain entity
//!
//! A planet is home to zero or more characters.

use serde::Deserialize;

use crate::domain::validation;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a planet
    PlanetId
}

/// A planet of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    /// External reference for the planet
    pub url: String,
    pub diameter_in_km: Option<f64>,
    pub rotation_period_in_days: Option<f64>,
    pub orbital_period_in_days: Option<f64>,
    pub gravity_in_g: Option<f64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water_percent: Option<f64>,
}

/// Data needed to create a new planet
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlanet {
    pub name: String,
    pub url: String,
    pub diameter_in_km: Option<f64>,
    pub rotation_period_in_days: Option<f64>,
    pub orbital_period_in_days: Option<f64>,
    pub gravity_in_g: Option<f64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water_percent: Option<f64>,
}

impl NewPlanet {
    pub fn validate(&self) -> Result<(), DomainError> {
        validation::required_text("name", &self.name, 150)?;
        validation::reference_url("url", &self.url, 240)?;
        validation::non_negative("diameter_in_km", self.diameter_in_km)?;
        validation::non_negative("rotation_period_in_days", self.rotation_period_in_days)?;
        validation::non_negative("orbital_period_in_days", self.orbital_period_in_days)?;
        validation::non_negative("gravity_in_g", self.gravity_in_g)?;
        validation::count("population", self.population)?;
        validation::optional_text("climate", self.climate.as_deref(), 240)?;
        validation::optional_text("terrain", self.terrain.as_deref(), 240)?;
        validation::percentage("surface_water_percent", self.surface_water_percent)?;
        Ok(())
    }
}
