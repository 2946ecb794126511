use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::favorites::{
    CreateFavoritePersonRequest, CreateFavoritePlanetRequest, FavoritePersonResponse,
    FavoritePlanetResponse, UserFavoritesResponse,
};
use crate::handlers::people::PersonResponse;
use crate::handlers::planets::PlanetResponse;
use crate::handlers::users::{CreateUserRequest, UserResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::people::get_people,
        crate::handlers::people::get_person,
        crate::handlers::favorites::get_user_favorites,
        crate::handlers::favorites::add_favorite_planet,
        crate::handlers::favorites::add_favorite_person,
        crate::handlers::favorites::remove_favorite_planet,
        crate::handlers::favorites::remove_favorite_person,
    ),
    components(
        schemas(
            ApiResponse<UserResponse>,
            ApiResponse<Vec<UserResponse>>,
            ApiResponse<PlanetResponse>,
            ApiResponse<Vec<PlanetResponse>>,
            ApiResponse<PersonResponse>,
            ApiResponse<Vec<PersonResponse>>,
            ApiResponse<FavoritePlanetResponse>,
            ApiResponse<FavoritePersonResponse>,
            ApiResponse<UserFavoritesResponse>,
            CreateUserRequest,
            CreateFavoritePlanetRequest,
            CreateFavoritePersonRequest,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User listing and registration"),
        (name = "planets", description = "Planet catalog endpoints"),
        (name = "people", description = "People catalog endpoints"),
        (name = "favorites", description = "Per-user favorite relations"),
    ),
    info(
        title = "Starfav API",
        description = "Favorites catalog API - planets, people, and per-user bookmarks",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
