use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::{Path, State},
    response::Json,
};
use model::entities::person;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// Person response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<person::Model> for PersonResponse {
    fn from(model: person::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
            gender: model.gender,
        }
    }
}

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = ApiResponse<Vec<PersonResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PersonResponse>>>, ApiError> {
    trace!("Entering get_people function");

    let people = person::Entity::find().all(&state.db).await?;
    debug!("Retrieved {} people from database", people.len());

    let person_responses: Vec<PersonResponse> =
        people.into_iter().map(PersonResponse::from).collect();

    let response = ApiResponse {
        data: person_responses,
        message: "People retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Get a specific person by ID
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = "people",
    params(
        ("person_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person retrieved successfully", body = ApiResponse<PersonResponse>),
        (status = 404, description = "Person not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_person(
    Path(person_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PersonResponse>>, ApiError> {
    trace!("Entering get_person function for person_id: {}", person_id);

    let person_model = person::Entity::find_by_id(person_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Person with id {} not found", person_id)))?;

    info!(
        "Successfully retrieved person with ID: {}, name: {}",
        person_model.id, person_model.name
    );
    let response = ApiResponse {
        data: PersonResponse::from(person_model),
        message: "Person retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
