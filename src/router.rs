use crate::handlers::{
    favorites::{
        add_favorite_person, add_favorite_planet, get_user_favorites, remove_favorite_person,
        remove_favorite_planet,
    },
    health::health_check,
    people::{get_people, get_person},
    planets::{get_planet, get_planets},
    users::{create_user, get_user, get_users},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // User routes
        .route("/users", post(create_user))
        .route("/users", get(get_users))
        .route("/users/:user_id", get(get_user))
        // Catalog routes
        .route("/planets", get(get_planets))
        .route("/planets/:planet_id", get(get_planet))
        .route("/people", get(get_people))
        .route("/people/:person_id", get(get_person))
        // Favorites routes
        .route("/users/:user_id/favorites", get(get_user_favorites))
        .route("/users/:user_id/favorite-planets", post(add_favorite_planet))
        .route("/users/:user_id/favorite-people", post(add_favorite_person))
        .route(
            "/users/:user_id/favorite-planets/:planet_id",
            delete(remove_favorite_planet),
        )
        .route(
            "/users/:user_id/favorite-people/:person_id",
            delete(remove_favorite_person),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
