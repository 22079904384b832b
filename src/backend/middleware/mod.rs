//! Middleware Module
//!
//! HTTP middleware run before the handlers.
//!
//! - **`logger`** - per-request logging, applied to every route
//! - **`auth`** - bearer token guard for the protected routes, plus the
//!   `AuthUser` extractor that hands the caller to handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::{from_fn, from_fn_with_state};
//! use postboard::backend::middleware::{auth_middleware, request_logger};
//!
//! let protected = protected.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! let app = app.layer(from_fn(request_logger));
//! ```

pub mod auth;
pub mod logger;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use logger::request_logger;
