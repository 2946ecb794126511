use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::{Path, State},
    response::Json,
};
use model::entities::planet;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// Planet response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            population: model.population,
            diameter: model.diameter,
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = ApiResponse<Vec<PlanetResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PlanetResponse>>>, ApiError> {
    trace!("Entering get_planets function");

    let planets = planet::Entity::find().all(&state.db).await?;
    debug!("Retrieved {} planets from database", planets.len());

    let planet_responses: Vec<PlanetResponse> =
        planets.into_iter().map(PlanetResponse::from).collect();

    let response = ApiResponse {
        data: planet_responses,
        message: "Planets retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = ApiResponse<PlanetResponse>),
        (status = 404, description = "Planet not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_planet(
    Path(planet_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PlanetResponse>>, ApiError> {
    trace!("Entering get_planet function for planet_id: {}", planet_id);

    let planet_model = planet::Entity::find_by_id(planet_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Planet with id {} not found", planet_id)))?;

    info!(
        "Successfully retrieved planet with ID: {}, name: {}",
        planet_model.id, planet_model.name
    );
    let response = ApiResponse {
        data: PlanetResponse::from(planet_model),
        message: "Planet retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
