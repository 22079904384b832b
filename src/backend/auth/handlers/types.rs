/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the register
 * and login handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::shared::error::{require_non_blank, SharedError};

/// Register request
///
/// Contains the username, password and email for account creation.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// Chosen username (unique)
    pub username: String,
    /// Password (hashed before storage)
    pub password: String,
    /// Email address (unique)
    pub email: String,
}

impl RegisterRequest {
    /// Reject blank fields, passwords bcrypt would truncate and emails without `@`
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("username", &self.username)?;
        require_non_blank("password", &self.password)?;
        require_non_blank("email", &self.email)?;

        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("password must be at most {MAX_PASSWORD_BYTES} bytes"),
            ));
        }

        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "email must be a valid address"));
        }

        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    /// Verified against the stored hash
    pub password: String,
}

/// Data returned by a successful login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for the protected endpoints
    pub token: String,
    pub user_id: i64,
}
