//! Backend Module
//!
//! This module contains all server-side code for postboard: an Axum HTTP
//! server exposing accounts, posts and comments over a JSON API backed by
//! SQLite.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, database handle, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, password hashing, JWT tokens
//! - **`posts`** - Post storage and handlers
//! - **`comments`** - Comment storage and handlers
//! - **`middleware`** - Request logging and the bearer token guard
//! - **`extract`** - Body and path extractors that reject with the error envelope
//! - **`error`** - Backend error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Posts
//! ├── comments/       - Comments
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the database pool and the token keys. Both are created
//! once at startup and passed explicitly to every handler; there is no
//! global connection.
//!
//! # Error Handling
//!
//! Handlers return `Result<ApiResponse<T>, BackendError>`; both sides render
//! as the `{ code, message, data | error }` envelope.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// Blog posts
pub mod posts;

/// Comments on posts
pub mod comments;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
