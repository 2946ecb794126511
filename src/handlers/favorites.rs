use crate::error::{is_unique_violation, ApiError};
use crate::handlers::users::UserResponse;
use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{favorite_person, favorite_planet, person, planet, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Request body for bookmarking a planet.
///
/// `planet_id` is required; it is an `Option` only so that a missing field
/// becomes a 400 with an explicit error instead of a deserialization reject.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateFavoritePlanetRequest {
    pub planet_id: Option<i32>,
}

/// Request body for bookmarking a person. The wire field is `people_id`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateFavoritePersonRequest {
    pub people_id: Option<i32>,
}

/// Favorite planet response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<favorite_planet::Model> for FavoritePlanetResponse {
    fn from(model: favorite_planet::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
        }
    }
}

/// Favorite person response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePersonResponse {
    pub id: i32,
    pub user_id: i32,
    pub person_id: i32,
}

impl From<favorite_person::Model> for FavoritePersonResponse {
    fn from(model: favorite_person::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            person_id: model.person_id,
        }
    }
}

/// A user together with everything they have bookmarked
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesResponse {
    pub user: UserResponse,
    pub favorite_planets: Vec<FavoritePlanetResponse>,
    pub favorite_people: Vec<FavoritePersonResponse>,
}

/// Get all favorites of a single user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = ApiResponse<UserFavoritesResponse>),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_user_favorites(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserFavoritesResponse>>, ApiError> {
    trace!("Entering get_user_favorites function for user_id: {}", user_id);

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User with id {} not found", user_id)))?;

    // Only this user's rows, never the whole join table.
    let favorite_planets = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?;

    let favorite_people = favorite_person::Entity::find()
        .filter(favorite_person::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?;

    debug!(
        "User {} has {} favorite planets and {} favorite people",
        user_id,
        favorite_planets.len(),
        favorite_people.len()
    );

    let response = ApiResponse {
        data: UserFavoritesResponse {
            user: UserResponse::from(user_model),
            favorite_planets: favorite_planets
                .into_iter()
                .map(FavoritePlanetResponse::from)
                .collect(),
            favorite_people: favorite_people
                .into_iter()
                .map(FavoritePersonResponse::from)
                .collect(),
        },
        message: "Favorites retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Bookmark a planet for a user
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite-planets",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = CreateFavoritePlanetRequest,
    responses(
        (status = 201, description = "Planet added to favorites", body = ApiResponse<FavoritePlanetResponse>),
        (status = 400, description = "Missing planet_id or planet already in favorites", body = crate::schemas::ErrorResponse),
        (status = 404, description = "User or planet not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn add_favorite_planet(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<CreateFavoritePlanetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FavoritePlanetResponse>>), ApiError> {
    trace!("Entering add_favorite_planet function for user_id: {}", user_id);

    // Validate the body before touching the database.
    let planet_id = request.planet_id.ok_or_else(|| {
        ApiError::validation("MISSING_PLANET_ID", "Missing planet_id in request body")
    })?;
    debug!("Adding favorite planet {} for user {}", planet_id, user_id);

    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User with id {} not found", user_id)))?;

    planet::Entity::find_by_id(planet_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Planet with id {} not found", planet_id)))?;

    let new_favorite = favorite_planet::ActiveModel {
        user_id: Set(user_id),
        planet_id: Set(planet_id),
        ..Default::default()
    };

    // A single insert; the unique index on (user_id, planet_id) turns a
    // concurrent duplicate into a constraint error instead of a second row.
    match new_favorite.insert(&state.db).await {
        Ok(favorite_model) => {
            info!(
                "Favorite planet created with ID: {} (user {}, planet {})",
                favorite_model.id, user_id, planet_id
            );
            let response = ApiResponse {
                data: FavoritePlanetResponse::from(favorite_model),
                message: "Planet added to favorites".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) if is_unique_violation(&db_error) => {
            warn!(
                "Duplicate favorite planet rejected (user {}, planet {})",
                user_id, planet_id
            );
            Err(ApiError::conflict(
                "PLANET_ALREADY_FAVORITE",
                "Planet already in favorites",
            ))
        }
        Err(db_error) => Err(db_error.into()),
    }
}

/// Bookmark a person for a user
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite-people",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = CreateFavoritePersonRequest,
    responses(
        (status = 201, description = "Person added to favorites", body = ApiResponse<FavoritePersonResponse>),
        (status = 400, description = "Missing people_id or person already in favorites", body = crate::schemas::ErrorResponse),
        (status = 404, description = "User or person not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn add_favorite_person(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<CreateFavoritePersonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FavoritePersonResponse>>), ApiError> {
    trace!("Entering add_favorite_person function for user_id: {}", user_id);

    let person_id = request.people_id.ok_or_else(|| {
        ApiError::validation("MISSING_PEOPLE_ID", "Missing people_id in request body")
    })?;
    debug!("Adding favorite person {} for user {}", person_id, user_id);

    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User with id {} not found", user_id)))?;

    person::Entity::find_by_id(person_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Person with id {} not found", person_id)))?;

    let new_favorite = favorite_person::ActiveModel {
        user_id: Set(user_id),
        person_id: Set(person_id),
        ..Default::default()
    };

    match new_favorite.insert(&state.db).await {
        Ok(favorite_model) => {
            info!(
                "Favorite person created with ID: {} (user {}, person {})",
                favorite_model.id, user_id, person_id
            );
            let response = ApiResponse {
                data: FavoritePersonResponse::from(favorite_model),
                message: "Person added to favorites".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) if is_unique_violation(&db_error) => {
            warn!(
                "Duplicate favorite person rejected (user {}, person {})",
                user_id, person_id
            );
            Err(ApiError::conflict(
                "PERSON_ALREADY_FAVORITE",
                "Person already in favorites",
            ))
        }
        Err(db_error) => Err(db_error.into()),
    }
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite-planets/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = ApiResponse<i32>),
        (status = 404, description = "Favorite not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn remove_favorite_planet(
    Path((user_id, planet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<i32>>, ApiError> {
    trace!(
        "Entering remove_favorite_planet function (user {}, planet {})",
        user_id,
        planet_id
    );

    let favorite = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .filter(favorite_planet::Column::PlanetId.eq(planet_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Favorite not found"))?;

    favorite.delete(&state.db).await?;
    info!(
        "Favorite planet removed (user {}, planet {})",
        user_id, planet_id
    );

    let response = ApiResponse {
        data: planet_id,
        message: "Planet removed from favorites".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite-people/{person_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("person_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = ApiResponse<i32>),
        (status = 404, description = "Favorite not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn remove_favorite_person(
    Path((user_id, person_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<i32>>, ApiError> {
    trace!(
        "Entering remove_favorite_person function (user {}, person {})",
        user_id,
        person_id
    );

    let favorite = favorite_person::Entity::find()
        .filter(favorite_person::Column::UserId.eq(user_id))
        .filter(favorite_person::Column::PersonId.eq(person_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Favorite not found"))?;

    favorite.delete(&state.db).await?;
    info!(
        "Favorite person removed (user {}, person {})",
        user_id, person_id
    );

    let response = ApiResponse {
        data: person_id,
        message: "Person removed from favorites".to_string(),
        success: true,
    };
    Ok(Json(response))
}
