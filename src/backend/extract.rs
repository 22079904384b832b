//! Request Extractors
//!
//! Thin wrappers over axum's `Json` and `Path` extractors whose rejections are
//! turned into [`BackendError::BadRequest`], so malformed bodies and path
//! parameters are answered with the error envelope instead of axum's plain
//! text rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);

/// Typed path parameter
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct PathParam<T>(pub T);
