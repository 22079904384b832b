/**
 * Login Handler
 *
 * Implements `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up the active account by username
 * 2. Verify the password using bcrypt
 * 3. Sign a token carrying the account id and username
 *
 * # Security
 *
 * An unknown username and a wrong password produce the same 401 response,
 * so the endpoint cannot be used to enumerate accounts.
 */
use axum::extract::State;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body
/// * `401 Unauthorized` - Unknown username or wrong password
/// * `500 Internal Server Error` - Database, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "code": 200,
///   "message": "login successful",
///   "data": { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "user_id": 1 }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(state.db.pool(), &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = state
        .sessions
        .create_token(user.id, &user.username)
        .map_err(|e| BackendError::internal("failed to generate token").with_detail(e))?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(ApiResponse::success(
        200,
        "login successful",
        LoginResponse {
            token,
            user_id: user.id,
        },
    ))
}
