//! Catalog API
//!
//! REST service over a small relational catalog: users, characters, planets,
//! vehicles, the characters-operate-vehicles association and per-user
//! favorites.
//!
//! Layout:
//! - `domain`: entities, repository ports, validation and serialized views
//! - `entity`: SeaORM table definitions
//! - `adapters`: SeaORM implementations of the repository ports
//! - `app`: services and the serializer that assembles views
//! - `handlers`: axum endpoints

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, SqlCharacterRepository, SqlCharacterVehicleRepository, SqlFavoriteRepository,
    SqlPlanetRepository, SqlUserRepository, SqlVehicleRepository,
};
use app::{CatalogSerializer, CatalogService, UserService};
use config::Config;

type SqlCatalogService = CatalogService<
    SqlCharacterRepository,
    SqlPlanetRepository,
    SqlVehicleRepository,
    SqlCharacterVehicleRepository,
>;

type SqlUserService = UserService<
    SqlUserRepository,
    SqlFavoriteRepository,
    SqlCharacterRepository,
    SqlPlanetRepository,
    SqlVehicleRepository,
    SqlCharacterVehicleRepository,
>;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<SqlCatalogService>,
    pub user_service: Arc<SqlUserService>,
}

impl AppState {
    /// Wire repositories and services over one pooled connection
    pub fn new(db: DatabaseConnection) -> Self {
        let character_repo = Arc::new(SqlCharacterRepository::new(db.clone()));
        let planet_repo = Arc::new(SqlPlanetRepository::new(db.clone()));
        let vehicle_repo = Arc::new(SqlVehicleRepository::new(db.clone()));
        let link_repo = Arc::new(SqlCharacterVehicleRepository::new(db.clone()));
        let user_repo = Arc::new(SqlUserRepository::new(db.clone()));
        let favorite_repo = Arc::new(SqlFavoriteRepository::new(db));

        let serializer = Arc::new(CatalogSerializer::new(
            character_repo.clone(),
            planet_repo.clone(),
            vehicle_repo.clone(),
            link_repo.clone(),
        ));

        let catalog_service = Arc::new(CatalogService::new(
            character_repo,
            planet_repo,
            vehicle_repo,
            link_repo,
            serializer.clone(),
        ));

        let user_service = Arc::new(UserService::new(user_repo, favorite_repo, serializer));

        Self {
            catalog_service,
            user_service,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router.
///
/// Rate limiting is applied separately in `main` because it keys on the
/// peer address, which only a real listener provides.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::sitemap))
        .route("/health", get(health))
        // Users and favorites
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/users/:id", get(handlers::get_user))
        .route(
            "/users/:id/favorites",
            get(handlers::get_user_favorites).post(handlers::add_favorite),
        )
        // Characters
        .route(
            "/characters",
            get(handlers::list_characters).post(handlers::create_characters),
        )
        .route("/characters/:id", get(handlers::get_character))
        .route(
            "/characters/:id/vehicles",
            get(handlers::get_character_vehicles).post(handlers::link_vehicle),
        )
        // Planets
        .route(
            "/planets",
            get(handlers::list_planets).post(handlers::create_planets),
        )
        .route("/planets/:id", get(handlers::get_planet))
        // Vehicles
        .route(
            "/vehicles",
            get(handlers::list_vehicles).post(handlers::create_vehicles),
        )
        .route("/vehicles/:id", get(handlers::get_vehicle))
        .route(
            "/vehicles/:id/characters",
            get(handlers::get_vehicle_characters),
        )
        .fallback(handlers::not_found)
        // Middleware
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Catalog API...");

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database ready");

    let mut app = router(AppState::new(db));

    if config.rate_limit_enabled() {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_millisecond(config.rate_limit_replenish_ms())
                .burst_size(config.rate_limit_burst)
                .finish()
                .context("Invalid rate limit configuration")?,
        );
        tracing::info!(
            per_second = config.rate_limit_per_second,
            burst = config.rate_limit_burst,
            "Rate limiting enabled"
        );
        app = app.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
