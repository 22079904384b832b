//! Response Envelope
//!
//! Every response body produced by the API has the same outer shape:
//!
//! ```json
//! { "code": 200, "message": "post fetched successfully", "data": { ... } }
//! { "code": 404, "message": "post not found" }
//! { "code": 500, "message": "database query failed", "error": "..." }
//! ```
//!
//! `code` always repeats the HTTP status. `data` and `error` are omitted when
//! there is nothing to carry.

use serde::{Deserialize, Serialize};

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub code: u16,
    /// Human-readable outcome
    pub message: String,
    /// Payload, if the operation returns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope carrying a payload
    pub fn success(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope without a payload
    pub fn empty(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code
    pub code: u16,
    /// Human-readable description of the failure
    pub message: String,
    /// Underlying cause, when one is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
