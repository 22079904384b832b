/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the only state shared between requests:
 * - the `Database` handle (a clonable connection pool)
 * - the JWT `SessionKeys` built from the configured secret
 * - the bcrypt cost used when registering accounts
 *
 * Nothing in here is mutable, so no locking is needed.
 *
 * # Example
 *
 * ```rust,no_run
 * use postboard::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let pool = state.db.pool();
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::Database;

/// Application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: Database,

    /// Token signing and verification keys
    pub sessions: Arc<SessionKeys>,

    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db: Database, config: &ServerConfig) -> Self {
        Self {
            db,
            sessions: Arc::new(SessionKeys::new(&config.jwt_secret, config.token_ttl)),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Implement FromRef for Database
///
/// The post and comment handlers only touch the store and extract
/// `State<Database>`.
impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
