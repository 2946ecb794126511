#[cfg(test)]
mod integration_tests {
    use crate::handlers::users::CreateUserRequest;
    use crate::router::create_router;
    use crate::schemas::{ApiResponse, ErrorResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_state};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use model::entities::{favorite_person, favorite_planet};
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateUserRequest {
            email: "han@rebellion.org".to_string(),
            password: "falcon".to_string(),
            is_active: None,
        };

        let response = server.post("/users").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "User created successfully");
        assert_eq!(body.data["email"], "han@rebellion.org");
        assert_eq!(body.data["is_active"], true);
        assert!(body.data["id"].as_i64().unwrap() > 0);
        // Password must never leak into responses
        assert!(body.data.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateUserRequest {
            email: "luke@rebellion.org".to_string(),
            password: "other".to_string(),
            is_active: None,
        };

        // Seeded data already contains this email
        let response = server.post("/users").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "EMAIL_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn test_get_users() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/users").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Users retrieved successfully");
        assert_eq!(body.data.len(), 2);

        let user = body
            .data
            .iter()
            .find(|u| u["email"] == "luke@rebellion.org")
            .unwrap();
        assert!(user["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/users/1").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["id"], 1);
        assert_eq!(body.data["email"], "luke@rebellion.org");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/users/99999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_planets() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/planets").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 2);

        let tatooine = body.data.iter().find(|p| p["name"] == "Tatooine").unwrap();
        assert_eq!(tatooine["climate"], "arid");
        assert_eq!(tatooine["population"], 200_000);
    }

    #[tokio::test]
    async fn test_get_planet_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/planets/2").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["name"], "Hoth");
        // Nullable catalog fields serialize as JSON null
        assert!(body.data["population"].is_null());
    }

    #[tokio::test]
    async fn test_get_planet_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/planets/99999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_people() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 2);
    }

    #[tokio::test]
    async fn test_get_person_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people/1").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["name"], "Luke Skywalker");
        assert_eq!(body.data["height"], 172);
    }

    #[tokio::test]
    async fn test_get_person_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people/99999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_favorite_planet() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 1 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Planet added to favorites");
        assert_eq!(body.data["user_id"], 1);
        assert_eq!(body.data["planet_id"], 1);
        assert!(body.data["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_add_favorite_planet_duplicate() {
        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).unwrap();

        let first = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 1 }))
            .await;
        first.assert_status(StatusCode::CREATED);

        let second = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 1 }))
            .await;
        second.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = second.json();
        assert!(!body.success);
        assert_eq!(body.error, "Planet already in favorites");

        // Exactly one row survives the duplicate attempt
        let rows = favorite_planet::Entity::find()
            .all(&state.db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_add_favorite_planet_missing_body_field() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "MISSING_PLANET_ID");
    }

    #[tokio::test]
    async fn test_add_favorite_planet_unknown_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/users/99999/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 1 }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_favorite_planet_unknown_planet() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 99999 }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_favorite_person() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // The wire field for people favorites is people_id
        let response = server
            .post("/users/2/favorite-people")
            .json(&serde_json::json!({ "people_id": 2 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.message, "Person added to favorites");
        assert_eq!(body.data["user_id"], 2);
        assert_eq!(body.data["person_id"], 2);
    }

    #[tokio::test]
    async fn test_add_favorite_person_duplicate() {
        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).unwrap();

        let first = server
            .post("/users/1/favorite-people")
            .json(&serde_json::json!({ "people_id": 1 }))
            .await;
        first.assert_status(StatusCode::CREATED);

        let second = server
            .post("/users/1/favorite-people")
            .json(&serde_json::json!({ "people_id": 1 }))
            .await;
        second.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = second.json();
        assert_eq!(body.error, "Person already in favorites");

        let rows = favorite_person::Entity::find()
            .all(&state.db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_add_favorite_person_missing_body_field() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/users/1/favorite-people")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "MISSING_PEOPLE_ID");
    }

    #[tokio::test]
    async fn test_remove_favorite_planet() {
        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).unwrap();

        let create = server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 2 }))
            .await;
        create.assert_status(StatusCode::CREATED);

        let response = server.delete("/users/1/favorite-planets/2").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<i32> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Planet removed from favorites");
        assert_eq!(body.data, 2);

        let rows = favorite_planet::Entity::find()
            .all(&state.db)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_remove_favorite_planet_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/users/1/favorite-planets/1").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Favorite not found");
    }

    #[tokio::test]
    async fn test_remove_favorite_person() {
        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).unwrap();

        let create = server
            .post("/users/2/favorite-people")
            .json(&serde_json::json!({ "people_id": 1 }))
            .await;
        create.assert_status(StatusCode::CREATED);

        let response = server.delete("/users/2/favorite-people/1").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<i32> = response.json();
        assert_eq!(body.message, "Person removed from favorites");
        assert_eq!(body.data, 1);

        let rows = favorite_person::Entity::find()
            .all(&state.db)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_remove_favorite_person_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/users/1/favorite-people/2").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user_favorites_scoped_to_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // User 1 bookmarks a planet and a person, user 2 bookmarks a planet
        server
            .post("/users/1/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 1 }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/users/1/favorite-people")
            .json(&serde_json::json!({ "people_id": 2 }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/users/2/favorite-planets")
            .json(&serde_json::json!({ "planet_id": 2 }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/users/1/favorites").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["user"]["id"], 1);
        assert_eq!(body.data["user"]["email"], "luke@rebellion.org");

        // Only user 1's rows, not user 2's
        let planets = body.data["favorite_planets"].as_array().unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0]["planet_id"], 1);

        let people = body.data["favorite_people"].as_array().unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0]["person_id"], 2);

        // User 2 sees only their own planet bookmark
        let other = server.get("/users/2/favorites").await;
        other.assert_status(StatusCode::OK);
        let other_body: ApiResponse<serde_json::Value> = other.json();
        let other_planets = other_body.data["favorite_planets"].as_array().unwrap();
        assert_eq!(other_planets.len(), 1);
        assert_eq!(other_planets[0]["planet_id"], 2);
        assert!(other_body.data["favorite_people"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_user_favorites_empty() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/users/1/favorites").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.data["favorite_planets"].as_array().unwrap().is_empty());
        assert!(body.data["favorite_people"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_favorites_unknown_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/users/99999/favorites").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
