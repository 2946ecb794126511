#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // SQLite needs this for ON DELETE CASCADE to fire
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing with a small seeded catalog
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        // Two users, two planets, two people for the tests to reference
        let test_user1 = model::entities::user::ActiveModel {
            email: Set("luke@rebellion.org".to_string()),
            password: Set("secret1".to_string()),
            is_active: Set(true),
            ..Default::default()
        };
        let test_user2 = model::entities::user::ActiveModel {
            email: Set("leia@rebellion.org".to_string()),
            password: Set("secret2".to_string()),
            is_active: Set(true),
            ..Default::default()
        };
        test_user1.insert(&db).await.expect("Failed to create test user 1");
        test_user2.insert(&db).await.expect("Failed to create test user 2");

        let planet1 = model::entities::planet::ActiveModel {
            name: Set("Tatooine".to_string()),
            climate: Set(Some("arid".to_string())),
            terrain: Set(Some("desert".to_string())),
            population: Set(Some(200_000)),
            diameter: Set(Some(10_465)),
            ..Default::default()
        };
        let planet2 = model::entities::planet::ActiveModel {
            name: Set("Hoth".to_string()),
            climate: Set(Some("frozen".to_string())),
            terrain: Set(Some("tundra".to_string())),
            population: Set(None),
            diameter: Set(Some(7_200)),
            ..Default::default()
        };
        planet1.insert(&db).await.expect("Failed to create test planet 1");
        planet2.insert(&db).await.expect("Failed to create test planet 2");

        let person1 = model::entities::person::ActiveModel {
            name: Set("Luke Skywalker".to_string()),
            height: Set(Some(172)),
            mass: Set(Some(77)),
            hair_color: Set(Some("blond".to_string())),
            eye_color: Set(Some("blue".to_string())),
            birth_year: Set(Some("19BBY".to_string())),
            gender: Set(Some("male".to_string())),
            ..Default::default()
        };
        let person2 = model::entities::person::ActiveModel {
            name: Set("Leia Organa".to_string()),
            height: Set(Some(150)),
            mass: Set(Some(49)),
            hair_color: Set(Some("brown".to_string())),
            eye_color: Set(Some("brown".to_string())),
            birth_year: Set(Some("19BBY".to_string())),
            gender: Set(Some("female".to_string())),
            ..Default::default()
        };
        person1.insert(&db).await.expect("Failed to create test person 1");
        person2.insert(&db).await.expect("Failed to create test person 2");

        AppState { db }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}
