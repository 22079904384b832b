/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * authentication. It extracts and verifies the bearer token from the
 * Authorization header and hands the caller's identity to the handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::errors::ErrorKind;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated caller, taken from the verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

impl AuthenticatedUser {
    /// Fails with 403 unless the caller is the owner of the record
    pub fn ensure_owns(&self, owner_id: i64, message: &str) -> Result<(), BackendError> {
        if self.user_id != owner_id {
            tracing::warn!(
                user_id = self.user_id,
                owner_id,
                "Rejected access to a record owned by another account"
            );
            return Err(BackendError::forbidden(message));
        }
        Ok(())
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Checks that the account still exists
/// 4. Attaches the caller to the request extensions
///
/// Every failure is reported as 401 Unauthorized.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let claims = app_state.sessions.verify_token(token).map_err(|e| {
        let message = match e.kind() {
            ErrorKind::ExpiredSignature => "token has expired",
            _ => "invalid token",
        };
        BackendError::unauthorized(message).with_detail(e)
    })?;

    get_user_by_id(app_state.db.pool(), claims.id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("account no longer exists"))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| BackendError::unauthorized("authorization header required"))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            BackendError::unauthorized("invalid authorization format, expected 'Bearer <token>'")
        })
}

/// Axum extractor for authenticated user
///
/// Only usable on routes behind [`auth_middleware`]; anywhere else it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
