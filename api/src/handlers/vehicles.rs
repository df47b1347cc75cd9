//! Vehicle handlers

use axum::{extract::State, http::StatusCode, Json};

use super::extract::{IdPath, JsonBody, OneOrMany};
use crate::domain::entities::{NewVehicle, VehicleId};
use crate::domain::views::{CharacterView, VehicleView};
use crate::error::AppError;
use crate::AppState;

/// GET /vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleView>>, AppError> {
    Ok(Json(state.catalog_service.list_vehicles().await?))
}

/// GET /vehicles/:id
pub async fn get_vehicle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<VehicleView>, AppError> {
    let vehicle = state
        .catalog_service
        .get_vehicle(&VehicleId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok(Json(vehicle))
}

/// POST /vehicles
///
/// Accepts one vehicle or an array of vehicles. Batches are all-or-nothing.
pub async fn create_vehicles(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<OneOrMany<NewVehicle>>,
) -> Result<(StatusCode, Json<OneOrMany<VehicleView>>), AppError> {
    let one = body.is_one();
    let created = state
        .catalog_service
        .create_vehicles(body.into_vec())
        .await?;

    Ok((StatusCode::CREATED, Json(OneOrMany::shaped(one, created)?)))
}

/// GET /vehicles/:id/characters
///
/// Characters that operate the vehicle.
pub async fn get_vehicle_characters(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Vec<CharacterView>>, AppError> {
    let characters = state
        .catalog_service
        .get_vehicle_characters(&VehicleId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok(Json(characters))
}
