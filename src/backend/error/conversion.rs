/**
 * Error Conversion
 *
 * Converts backend errors and success envelopes into HTTP responses, and
 * lifts driver, extractor and validation errors into `BackendError`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "code": 409,
 *   "message": "username or email already exists",
 *   "error": "UNIQUE constraint failed: users.username"
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::{ApiResponse, ErrorResponse, SharedError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = ?self.detail(), "{}", self.message());
        } else {
            tracing::warn!(status = status.as_u16(), detail = ?self.detail(), "{}", self.message());
        }

        let body = ErrorResponse {
            code: status.as_u16(),
            message: self.message().to_string(),
            error: self.detail().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => BackendError::not_found("record not found"),
            other => BackendError::internal("database query failed").with_detail(other),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::bad_request("invalid request body").with_detail(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::bad_request("invalid path parameter").with_detail(rejection.body_text())
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        let message = match &err {
            SharedError::ValidationError { message, .. } => message.clone(),
        };
        BackendError::bad_request(message).with_detail(err)
    }
}
