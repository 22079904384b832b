//! Common test utilities and helpers
//!
//! This module provides shared utilities for the API tests:
//! - `TestApp`: the full router on a fresh in-memory database
//! - Authentication helpers (register, login, bearer headers)
//! - Envelope assertions
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

pub use assertions::*;
pub use auth_helpers::*;

use axum_test::TestServer;
use postboard::backend::routes::create_router;
use postboard::backend::server::{config::ServerConfig, database::Database, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// The application under test plus direct access to its database
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
    pub config: ServerConfig,
}

impl TestApp {
    /// Build an isolated app; every call gets its own empty database
    pub async fn new() -> Self {
        let config = ServerConfig::builder()
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(4)
            .build()
            .expect("Failed to build test configuration");

        let db = Database::connect(&config.database_url, config.max_connections)
            .await
            .expect("Failed to open test database");
        db.migrate().await.expect("Failed to migrate test database");

        let router = create_router(AppState::new(db.clone(), &config));
        let server = TestServer::new(router).expect("Failed to start test server");

        Self { server, db, config }
    }
}
