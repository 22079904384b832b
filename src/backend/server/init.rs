/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: opening the
 * database, applying the schema, building the state and the router.
 *
 * # Initialization Process
 *
 * 1. Open the connection pool described by the configuration
 * 2. Apply the embedded migrations
 * 3. Build `AppState` (database, token keys, bcrypt cost)
 * 4. Create the router
 *
 * Any failure aborts startup.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::database::Database;
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing postboard backend server");

    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.migrate().await?;

    let app_state = AppState::new(db, config);
    let app = create_router(app_state);

    tracing::info!(
        token_ttl_hours = config.token_ttl.num_hours(),
        bcrypt_cost = config.bcrypt_cost,
        "Router configured"
    );

    Ok(app)
}
