//! Index handlers
//!
//! The sitemap served at `/` and the JSON fallback for unknown routes.

use axum::{http::Uri, Json};
use serde::Serialize;

use crate::error::AppError;

/// One entry of the sitemap
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn route(method: &'static str, path: &'static str, description: &'static str) -> RouteInfo {
    RouteInfo {
        method,
        path,
        description,
    }
}

/// Every route the API serves
pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/", "This sitemap"),
    route("GET", "/health", "Service health and version"),
    route("GET", "/users", "List users with their favorites"),
    route("POST", "/users", "Create a user"),
    route("GET", "/users/:id", "Get a user"),
    route("GET", "/users/:id/favorites", "List a user's favorites"),
    route("POST", "/users/:id/favorites", "Add a favorite for a user"),
    route("GET", "/characters", "List characters"),
    route("POST", "/characters", "Create one or more characters"),
    route("GET", "/characters/:id", "Get a character"),
    route("GET", "/characters/:id/vehicles", "List vehicles a character operates"),
    route("POST", "/characters/:id/vehicles", "Link a vehicle to a character"),
    route("GET", "/planets", "List planets"),
    route("POST", "/planets", "Create one or more planets"),
    route("GET", "/planets/:id", "Get a planet"),
    route("GET", "/vehicles", "List vehicles"),
    route("POST", "/vehicles", "Create one or more vehicles"),
    route("GET", "/vehicles/:id", "Get a vehicle"),
    route("GET", "/vehicles/:id/characters", "List characters operating a vehicle"),
];

#[derive(Debug, Serialize)]
pub struct SitemapResponse {
    pub routes: &'static [RouteInfo],
}

/// GET /
pub async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse { routes: ROUTES })
}

/// Fallback for any unmatched route
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
