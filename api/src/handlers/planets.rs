//! Planet handlers

use axum::{extract::State, http::StatusCode, Json};

use super::extract::{IdPath, JsonBody, OneOrMany};
use crate::domain::entities::{NewPlanet, PlanetId};
use crate::domain::views::PlanetView;
use crate::error::AppError;
use crate::AppState;

/// GET /planets
pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetView>>, AppError> {
    Ok(Json(state.catalog_service.list_planets().await?))
}

/// GET /planets/:id
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PlanetView>, AppError> {
    let planet = state
        .catalog_service
        .get_planet(&PlanetId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Planet {} not found", id)))?;

    Ok(Json(planet))
}

/// POST /planets
///
/// Accepts one planet or an array of planets. Batches are all-or-nothing.
pub async fn create_planets(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<OneOrMany<NewPlanet>>,
) -> Result<(StatusCode, Json<OneOrMany<PlanetView>>), AppError> {
    let one = body.is_one();
    let created = state.catalog_service.create_planets(body.into_vec()).await?;

    Ok((StatusCode::CREATED, Json(OneOrMany::shaped(one, created)?)))
}
