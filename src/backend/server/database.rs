//! Persistence Accessor
//!
//! `Database` owns the SQLite connection pool shared by every request. It is
//! built once at startup from [`ServerConfig`](super::config::ServerConfig)
//! and handed to the handlers through the application state.
//!
//! ```rust,no_run
//! use postboard::backend::server::database::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite:postboard.db", 5).await?;
//! db.migrate().await?;
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Shared handle to the relational store
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool for `database_url`.
    ///
    /// File databases are created when missing. An in-memory database lives
    /// only as long as its connection, so the pool is pinned to a single
    /// connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        tracing::info!("Connecting to database...");
        let pool = pool_options.connect_with(options).await?;
        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Apply the embedded schema
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
