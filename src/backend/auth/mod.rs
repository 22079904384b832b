//! Authentication Module
//!
//! This module handles account registration, login and the bearer tokens
//! that protect the write endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account model and database operations
//! ├── password.rs     - bcrypt hashing off the async workers
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Account registration handler
//!     └── login.rs    - Authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, password and email → account created (no token)
//! 2. **Login**: username and password → credentials verified → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → verified by
//!    [`auth_middleware`](crate::backend::middleware::auth::auth_middleware)
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Tokens expire after the configured lifetime (24 hours by default)
//! - Invalid credentials return 401 (no information leakage)

/// Account data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register, LoginRequest, LoginResponse, RegisterRequest};
pub use sessions::{Claims, SessionKeys};
