//! User handlers
//!
//! Endpoints for users and their favorites.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::extract::{IdPath, JsonBody};
use crate::domain::entities::{CharacterId, FavoriteTarget, NewUser, PlanetId, UserId, VehicleId};
use crate::domain::views::{FavoriteView, UserView};
use crate::error::AppError;
use crate::AppState;

/// Request to add a favorite; exactly one id must be given
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateFavoriteRequest {
    pub character_id: Option<CharacterId>,
    pub planet_id: Option<PlanetId>,
    pub vehicle_id: Option<VehicleId>,
}

impl CreateFavoriteRequest {
    pub fn target(&self) -> Result<FavoriteTarget, AppError> {
        Ok(FavoriteTarget::exactly_one(
            self.character_id,
            self.planet_id,
            self.vehicle_id,
        )?)
    }
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, AppError> {
    Ok(Json(state.user_service.list_users().await?))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<UserView>, AppError> {
    let user = state
        .user_service
        .get_user(&UserId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let user = state.user_service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/:id/favorites
pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    let favorites = state
        .user_service
        .get_user_favorites(&UserId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(favorites))
}

/// POST /users/:id/favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteView>), AppError> {
    let target = request.target()?;
    let favorite = state
        .user_service
        .add_favorite(&UserId(id), target)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}
