//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! middleware of the backend, and its conversion into the JSON error
//! envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Taxonomy
//!
//! | Variant        | Status | Raised when                                   |
//! |----------------|--------|-----------------------------------------------|
//! | `BadRequest`   | 400    | malformed JSON, bad path parameter, blank field |
//! | `Unauthorized` | 401    | missing, malformed, invalid or expired token  |
//! | `Forbidden`    | 403    | caller does not own the record                |
//! | `NotFound`     | 404    | the record does not exist or was deleted      |
//! | `Conflict`     | 409    | username or email already taken               |
//! | `Internal`     | 500    | database, hashing or signing failure          |
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::error::BackendError;
//!
//! async fn handler() -> Result<&'static str, BackendError> {
//!     Err(BackendError::not_found("post not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
