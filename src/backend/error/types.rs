/**
 * Backend Error Types
 *
 * Every failure a handler can report maps onto one of six variants, each
 * tied to a single HTTP status. The message is shown to the client as-is;
 * the optional detail carries the underlying cause (driver error, JSON
 * rejection text, ...) and ends up in the `error` field of the envelope.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use postboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::forbidden("you can only update your own posts");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
///
/// let err = BackendError::internal("database query failed").with_detail("disk I/O error");
/// assert_eq!(err.detail(), Some("disk I/O error"));
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or unacceptable input
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    /// Missing, malformed, invalid or expired credential
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        detail: Option<String>,
    },

    /// Authenticated caller does not own the record
    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
        detail: Option<String>,
    },

    /// Entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        detail: Option<String>,
    },

    /// Unique constraint violation
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        detail: Option<String>,
    },

    /// Unclassified persistence or crypto failure
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into(), detail: None }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into(), detail: None }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into(), detail: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into(), detail: None }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into(), detail: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), detail: None }
    }

    /// Attach the underlying cause to the error
    pub fn with_detail(mut self, cause: impl std::fmt::Display) -> Self {
        let slot = match &mut self {
            Self::BadRequest { detail, .. }
            | Self::Unauthorized { detail, .. }
            | Self::Forbidden { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Conflict { detail, .. }
            | Self::Internal { detail, .. } => detail,
        };
        *slot = Some(cause.to_string());
        self
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Underlying cause, if one was attached
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest { detail, .. }
            | Self::Unauthorized { detail, .. }
            | Self::Forbidden { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Conflict { detail, .. }
            | Self::Internal { detail, .. } => detail.as_deref(),
        }
    }
}
