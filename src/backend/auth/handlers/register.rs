/**
 * Register Handler
 *
 * Implements `POST /register`.
 *
 * # Registration Process
 *
 * 1. Validate the body (no blank fields, email contains `@`)
 * 2. Hash the password with bcrypt at the configured cost
 * 3. Insert the account
 *
 * A taken username or email surfaces as a UNIQUE violation and is reported
 * as 409 Conflict. No token is issued; the client logs in afterwards.
 */
use axum::extract::State;

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::create_user;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, blank field or invalid email
/// * `409 Conflict` - Username or email already registered
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "hunter2", "email": "alice@example.com" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<ApiResponse<()>, BackendError> {
    request.validate()?;
    tracing::info!("Register request for: {}", request.username);

    let password_hash = hash_password(&request.password, state.bcrypt_cost).await?;

    let user = create_user(state.db.pool(), &request.username, &request.email, &password_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                BackendError::conflict("username or email already exists")
                    .with_detail(db_err.message())
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("User registered successfully: {} (id {})", user.username, user.id);

    Ok(ApiResponse::empty(201, "user registered successfully"))
}
