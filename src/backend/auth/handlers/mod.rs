//! Authentication Handlers Module
//!
//! HTTP handlers for the public account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Account registration handler
//! └── login.rs     - Credential check and token issue
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Account registration
//! - **`login`** - POST /login - Authentication, returns a bearer token

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub use types::{LoginRequest, LoginResponse, RegisterRequest};

pub use login::login;
pub use register::register;
