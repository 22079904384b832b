//! Authentication API integration tests
//!
//! Registration, login and the bearer token guard.

mod common;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{assert_envelope, assert_error, bearer, TestApp, TEST_SECRET};
use postboard::backend::auth::sessions::SessionKeys;
use postboard::backend::auth::users::soft_delete_user;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app.register("alice", "password123").await;
    let body = assert_envelope(&response, StatusCode::CREATED, "user registered successfully");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({
            "username": "alice",
            "password": "other",
            "email": "different@example.com"
        }))
        .await;
    assert_envelope(&response, StatusCode::CONFLICT, "username or email already exists");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({
            "username": "alice2",
            "password": "password123",
            "email": "alice@example.com"
        }))
        .await;
    assert_error(&response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let blank_username = app
        .server
        .post("/register")
        .json(&json!({ "username": "  ", "password": "pw", "email": "a@example.com" }))
        .await;
    assert_error(&blank_username, StatusCode::BAD_REQUEST);

    let bad_email = app
        .server
        .post("/register")
        .json(&json!({ "username": "bob", "password": "pw", "email": "not-an-email" }))
        .await;
    assert_error(&bad_email, StatusCode::BAD_REQUEST);

    let missing_field = app
        .server
        .post("/register")
        .json(&json!({ "username": "bob", "password": "pw" }))
        .await;
    let body = assert_envelope(&missing_field, StatusCode::BAD_REQUEST, "invalid request body");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_ignores_case() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app.register("Alice", "password123").await;
    assert_envelope(&response, StatusCode::CONFLICT, "username or email already exists");
}

#[tokio::test]
async fn test_register_rejects_password_bcrypt_would_truncate() {
    let app = TestApp::new().await;

    let response = app.register("alice", &"x".repeat(73)).await;
    assert_error(&response, StatusCode::BAD_REQUEST);

    let response = app.register("alice", &"x".repeat(72)).await;
    assert_envelope(&response, StatusCode::CREATED, "user registered successfully");
}

#[tokio::test]
async fn test_login_with_longer_password_sharing_prefix_fails() {
    let app = TestApp::new().await;
    let password = "x".repeat(72);
    app.register("alice", &password).await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": format!("{password}DIFFERENT") }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "invalid username or password");
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .bytes(axum::body::Bytes::from_static(b"{\"username\": "))
        .content_type("application/json")
        .await;
    assert_envelope(&response, StatusCode::BAD_REQUEST, "invalid request body");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "password123" }))
        .await;
    let body = assert_envelope(&response, StatusCode::OK, "login successful");

    let token = body["data"]["token"].as_str().unwrap();
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let claims = SessionKeys::new(TEST_SECRET, Duration::hours(24))
        .verify_token(token)
        .unwrap();
    assert_eq!(claims.id, user_id);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "wrongpassword" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "nobody", "password": "password123" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "invalid username or password");
}

#[tokio::test]
async fn test_protected_route_requires_header() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/create-post")
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "authorization header required");
}

#[tokio::test]
async fn test_protected_route_rejects_wrong_scheme() {
    let app = TestApp::new().await;
    let user = app.create_test_user("alice").await;

    let response = app
        .server
        .post("/create-post")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&user.token).unwrap())
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_envelope(
        &response,
        StatusCode::UNAUTHORIZED,
        "invalid authorization format, expected 'Bearer <token>'",
    );
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let app = TestApp::new().await;

    let (name, value) = bearer("not.a.token");
    let response = app
        .server
        .delete("/delposts/1")
        .add_header(name, value)
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let user = app.create_test_user("alice").await;

    let stale = SessionKeys::new(TEST_SECRET, Duration::hours(24))
        .create_token_at(user.id, &user.username, Utc::now() - Duration::hours(25))
        .unwrap();

    let (name, value) = bearer(&stale);
    let response = app
        .server
        .post("/create-post")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "token has expired");
}

#[tokio::test]
async fn test_token_one_second_past_expiry_is_rejected() {
    let app = TestApp::new().await;
    let user = app.create_test_user("alice").await;

    let issued_at = Utc::now() - Duration::hours(24) - Duration::seconds(1);
    let stale = SessionKeys::new(TEST_SECRET, Duration::hours(24))
        .create_token_at(user.id, &user.username, issued_at)
        .unwrap();

    let (name, value) = bearer(&stale);
    let response = app
        .server
        .post("/create-post")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "token has expired");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let user = app.create_test_user("alice").await;

    let forged = SessionKeys::new("some-other-secret", Duration::hours(24))
        .create_token(user.id, &user.username)
        .unwrap();

    let (name, value) = bearer(&forged);
    let response = app
        .server
        .post("/create-post")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_of_deleted_account_is_rejected() {
    let app = TestApp::new().await;
    let user = app.create_test_user("alice").await;
    soft_delete_user(app.db.pool(), user.id).await.unwrap();

    let (name, value) = bearer(&user.token);
    let response = app
        .server
        .post("/create-post")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_envelope(&response, StatusCode::UNAUTHORIZED, "account no longer exists");

    let login = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": user.password }))
        .await;
    assert_error(&login, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let app = TestApp::new().await;

    let response = app.server.get("/does-not-exist").await;
    assert_envelope(&response, StatusCode::NOT_FOUND, "route not found");
}
