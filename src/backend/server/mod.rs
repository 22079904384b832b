//! Server Module
//!
//! This module contains the server-side setup: configuration, the database
//! handle, the shared application state and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading and validation
//! ├── database.rs     - SQLite pool and migrations
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `.env` and environment into `ServerConfig`
//! 2. **Database**: pool opened, schema migrated
//! 3. **State Creation**: database handle and token keys in `AppState`
//! 4. **Router Creation**: routes, auth guard and request logging
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Database connection pool
pub mod database;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
