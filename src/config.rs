use crate::schemas::AppState;
use anyhow::Result;
use sea_orm::Database;

/// Initialize application state for a specific database URL.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    dotenvy::dotenv().ok();

    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}
