//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - Public and protected blog endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::routes::create_router;
//! use postboard::backend::server::{config::ServerConfig, database::Database, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder().jwt_secret("change-me").build()?;
//! let db = Database::connect(&config.database_url, config.max_connections).await?;
//! let router = create_router(AppState::new(db, &config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Blog endpoint wiring
pub mod api_routes;

pub use router::create_router;
