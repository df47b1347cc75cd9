//! Character handlers
//!
//! Endpoints for characters and the vehicles they operate.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::extract::{IdPath, JsonBody, OneOrMany};
use crate::domain::entities::{CharacterId, NewCharacter, VehicleId};
use crate::domain::views::{CharacterVehicleLinkView, CharacterView, VehicleView};
use crate::error::AppError;
use crate::AppState;

/// Request to record that a character operates a vehicle
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkVehicleRequest {
    pub vehicle_id: VehicleId,
}

/// GET /characters
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterView>>, AppError> {
    Ok(Json(state.catalog_service.list_characters().await?))
}

/// GET /characters/:id
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<CharacterView>, AppError> {
    let character = state
        .catalog_service
        .get_character(&CharacterId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character {} not found", id)))?;

    Ok(Json(character))
}

/// POST /characters
///
/// Accepts one character or an array of characters. Batches are
/// all-or-nothing.
pub async fn create_characters(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<OneOrMany<NewCharacter>>,
) -> Result<(StatusCode, Json<OneOrMany<CharacterView>>), AppError> {
    let one = body.is_one();
    let created = state
        .catalog_service
        .create_characters(body.into_vec())
        .await?;

    Ok((StatusCode::CREATED, Json(OneOrMany::shaped(one, created)?)))
}

/// GET /characters/:id/vehicles
///
/// Vehicles the character operates.
pub async fn get_character_vehicles(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Vec<VehicleView>>, AppError> {
    let vehicles = state
        .catalog_service
        .get_character_vehicles(&CharacterId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character {} not found", id)))?;

    Ok(Json(vehicles))
}

/// POST /characters/:id/vehicles
pub async fn link_vehicle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<LinkVehicleRequest>,
) -> Result<(StatusCode, Json<CharacterVehicleLinkView>), AppError> {
    let link = state
        .catalog_service
        .link_vehicle(&CharacterId(id), &request.vehicle_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link)))
}
