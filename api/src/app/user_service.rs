//! User service
//!
//! Handles user registration and the favorites each user keeps.

use std::sync::Arc;

use crate::domain::entities::{FavoriteTarget, NewFavorite, NewUser, User, UserId};
use crate::domain::ports::{
    CharacterRepository, CharacterVehicleRepository, FavoriteRepository, PlanetRepository,
    UserRepository, VehicleRepository,
};
use crate::domain::views::{FavoriteView, UserView};
use crate::error::{AppError, DomainError};

use super::CatalogSerializer;

/// Service for managing users and their favorites
pub struct UserService<UR, FR, CR, PR, VR, LR>
where
    UR: UserRepository,
    FR: FavoriteRepository,
    CR: CharacterRepository,
    PR: PlanetRepository,
    VR: VehicleRepository,
    LR: CharacterVehicleRepository,
{
    users: Arc<UR>,
    favorites: Arc<FR>,
    serializer: Arc<CatalogSerializer<CR, PR, VR, LR>>,
}

impl<UR, FR, CR, PR, VR, LR> UserService<UR, FR, CR, PR, VR, LR>
where
    UR: UserRepository,
    FR: FavoriteRepository,
    CR: CharacterRepository,
    PR: PlanetRepository,
    VR: VehicleRepository,
    LR: CharacterVehicleRepository,
{
    pub fn new(
        users: Arc<UR>,
        favorites: Arc<FR>,
        serializer: Arc<CatalogSerializer<CR, PR, VR, LR>>,
    ) -> Self {
        Self {
            users,
            favorites,
            serializer,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserView>, AppError> {
        let users = self.users.find_all().await?;
        let mut views = Vec::with_capacity(users.len());
        for user in users {
            views.push(self.user_view(user).await?);
        }
        Ok(views)
    }

    pub async fn get_user(&self, id: &UserId) -> Result<Option<UserView>, AppError> {
        match self.users.find_by_id(id).await? {
            Some(user) => Ok(Some(self.user_view(user).await?)),
            None => Ok(None),
        }
    }

    /// Favorites of a user, or `None` if the user is unknown
    pub async fn get_user_favorites(
        &self,
        id: &UserId,
    ) -> Result<Option<Vec<FavoriteView>>, AppError> {
        if self.users.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let favorites = self.favorites.find_by_user(id).await?;
        Ok(Some(self.serializer.favorites(&favorites).await?))
    }

    /// Register a new user
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserView, AppError> {
        new_user.validate()?;

        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(DomainError::ConstraintViolation(format!(
                "user '{}' already exists",
                new_user.username
            ))
            .into());
        }

        let user = self.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user created");

        Ok(UserView::new(user, vec![]))
    }

    /// Add a favorite for a user; the target must exist
    pub async fn add_favorite(
        &self,
        user_id: &UserId,
        target: FavoriteTarget,
    ) -> Result<FavoriteView, AppError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::NotFound(format!("User {} not found", user_id)).into());
        }
        if !self.serializer.target_exists(target).await? {
            return Err(
                DomainError::ConstraintViolation(format!("{} does not exist", target)).into(),
            );
        }

        let favorite = self
            .favorites
            .create(&NewFavorite {
                user_id: *user_id,
                target,
            })
            .await?;
        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %favorite.user_id,
            target = %target,
            "favorite added"
        );

        Ok(self.serializer.favorite(&favorite).await?)
    }

    async fn user_view(&self, user: User) -> Result<UserView, AppError> {
        let favorites = self.favorites.find_by_user(&user.id).await?;
        let views = self.serializer.favorites(&favorites).await?;
        Ok(UserView::new(user, views))
    }
}
