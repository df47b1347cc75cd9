//! Character domain entity
//!
//! A character optionally hails from a planet and operates any number of
//! vehicles through [`CharacterVehicleLink`](super::CharacterVehicleLink) rows.

use serde::Deserialize;

use super::planet::PlanetId;
use crate::domain::validation;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a character
    CharacterId
}

/// A character of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub url: String,
    pub height_in_cm: Option<f64>,
    pub mass_in_kg: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    /// Free-text era string such as "19BBY"
    pub birthyear: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<PlanetId>,
}

/// Data needed to create a new character
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCharacter {
    pub name: String,
    pub url: String,
    pub height_in_cm: Option<f64>,
    pub mass_in_kg: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birthyear: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<PlanetId>,
}

impl NewCharacter {
    pub fn validate(&self) -> Result<(), DomainError> {
        validation::required_text("name", &self.name, 150)?;
        validation::reference_url("url", &self.url, 240)?;
        validation::non_negative("height_in_cm", self.height_in_cm)?;
        validation::non_negative("mass_in_kg", self.mass_in_kg)?;
        validation::optional_text("hair_color", self.hair_color.as_deref(), 30)?;
        validation::optional_text("skin_color", self.skin_color.as_deref(), 30)?;
        validation::optional_text("eye_color", self.eye_color.as_deref(), 30)?;
        validation::optional_text("birthyear", self.birthyear.as_deref(), 30)?;
        validation::optional_text("gender", self.gender.as_deref(), 30)?;
        Ok(())
    }
}
