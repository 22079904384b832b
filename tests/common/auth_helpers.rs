//! Authentication test helpers
//!
//! Register and log in accounts through the public endpoints and build
//! `Authorization` headers for the protected ones.

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};

use super::TestApp;

/// A registered and logged-in account
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// `Authorization: Bearer <token>` header pair
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("Invalid token header");
    (AUTHORIZATION, value)
}

impl TestApp {
    /// Register `username` with the email `<username>@example.com`
    pub async fn register(&self, username: &str, password: &str) -> axum_test::TestResponse {
        self.server
            .post("/register")
            .json(&json!({
                "username": username,
                "password": password,
                "email": format!("{username}@example.com"),
            }))
            .await
    }

    /// Log in and return the `data` object of the envelope
    pub async fn login(&self, username: &str, password: &str) -> Value {
        let response = self
            .server
            .post("/login")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status(StatusCode::OK);
        response.json::<Value>()["data"].clone()
    }

    /// Register and log in a fresh account
    pub async fn create_test_user(&self, username: &str) -> TestUser {
        let password = "password123";
        self.register(username, password)
            .await
            .assert_status(StatusCode::CREATED);

        let data = self.login(username, password).await;
        TestUser {
            id: data["user_id"].as_i64().expect("user_id missing from login response"),
            username: username.to_string(),
            password: password.to_string(),
            token: data["token"]
                .as_str()
                .expect("token missing from login response")
                .to_string(),
        }
    }

    /// Create a post as `user` and return its `data` object
    pub async fn create_post(&self, user: &TestUser, title: &str, content: &str) -> Value {
        let (name, value) = bearer(&user.token);
        let response = self
            .server
            .post("/create-post")
            .add_header(name, value)
            .json(&json!({ "title": title, "content": content }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["data"].clone()
    }
}
