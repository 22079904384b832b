//! Postboard - Main Library
//!
//! Postboard is a small blog backend: accounts register and log in, then
//! publish posts and comment on them through a JSON HTTP API.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types independent of the server
//!   - Response envelope, post/comment/account views, request bodies
//!   - Validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and middleware
//!   - bcrypt passwords and HS256 bearer tokens
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for request validation
//! - `backend::error::BackendError` for everything a handler can report
//! - `backend::server::StartupError` for failures before the server listens

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
