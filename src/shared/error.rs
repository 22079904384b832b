//! Shared Error Types
//!
//! This module defines the error produced when a request body is well-formed
//! JSON but its content is unacceptable (blank title, email without `@`, ...).
//!
//! # Usage
//!
//! ```rust
//! use postboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title must not be empty");
//! assert_eq!(error.field(), "title");
//! ```
use thiserror::Error;

/// Shared error types raised while validating request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

/// Fails with a validation error when `value` is empty after trimming.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{field} must not be empty")));
    }
    Ok(())
}
