/**
 * Password Hashing
 *
 * bcrypt is deliberately slow, so both hashing and verification run on the
 * blocking thread pool instead of an async worker.
 */

use crate::backend::error::BackendError;

/// bcrypt only reads this many bytes; longer passwords are refused, not cut
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a plaintext password at the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::internal("password hashing failed").with_detail(e))?
        .map_err(|e| BackendError::internal("password hashing failed").with_detail(e))
}

/// Check a plaintext password against a stored bcrypt hash
///
/// A password over [`MAX_PASSWORD_BYTES`] never matches: no such password
/// could have been registered.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| BackendError::internal("password verification failed").with_detail(e))?
        .map_err(|e| BackendError::internal("password verification failed").with_detail(e))
}
