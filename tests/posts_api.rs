//! Posts API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{assert_envelope, assert_error, bearer, TestApp};

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .post("/create-post")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await;
    let body = assert_envelope(&response, StatusCode::CREATED, "post created successfully");

    assert_eq!(body["data"]["title"], "Hello");
    assert_eq!(body["data"]["content"], "World");
    assert_eq!(body["data"]["user_id"], alice.id);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_post_rejects_blank_fields() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    for payload in [
        json!({ "title": "", "content": "World" }),
        json!({ "title": "Hello", "content": "   " }),
        json!({ "title": "Hello" }),
    ] {
        let (name, value) = bearer(&alice.token);
        let response = app
            .server
            .post("/create-post")
            .add_header(name, value)
            .json(&payload)
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_list_posts_includes_authors() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let bob = app.create_test_user("bob").await;
    app.create_post(&alice, "First", "one").await;
    app.create_post(&bob, "Second", "two").await;

    let response = app.server.get("/posts").await;
    let body = assert_envelope(&response, StatusCode::OK, "posts fetched successfully");

    let posts = body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "First");
    assert_eq!(posts[0]["user"]["username"], "alice");
    assert_eq!(posts[1]["user"]["username"], "bob");
    assert!(posts[0]["user"].get("password_hash").is_none());
    assert!(posts[0].get("comments").is_none());
}

#[tokio::test]
async fn test_list_posts_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/posts").await;
    let body = assert_envelope(&response, StatusCode::OK, "posts fetched successfully");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_get_post_with_comments() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let bob = app.create_test_user("bob").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&bob.token);
    app.server
        .post("/comments")
        .add_header(name, value)
        .json(&json!({ "content": "Nice post", "post_id": post_id }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get(&format!("/posts/{post_id}")).await;
    let body = assert_envelope(&response, StatusCode::OK, "post fetched successfully");

    assert_eq!(body["data"]["id"], post_id);
    assert_eq!(body["data"]["user"]["username"], "alice");
    let comments = body["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Nice post");
    assert_eq!(comments[0]["user"]["username"], "bob");
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = TestApp::new().await;

    let response = app.server.get("/posts/42").await;
    assert_envelope(&response, StatusCode::NOT_FOUND, "post not found");
}

#[tokio::test]
async fn test_get_post_with_invalid_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/posts/abc").await;
    assert_envelope(&response, StatusCode::BAD_REQUEST, "invalid path parameter");
}

#[tokio::test]
async fn test_update_own_post() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .put(&format!("/upposts/{post_id}"))
        .add_header(name, value)
        .json(&json!({ "title": "Hello again" }))
        .await;
    let body = assert_envelope(&response, StatusCode::OK, "post updated successfully");

    assert_eq!(body["data"]["title"], "Hello again");
    assert_eq!(body["data"]["content"], "World");

    let fetched: Value = app.server.get(&format!("/posts/{post_id}")).await.json();
    assert_eq!(fetched["data"]["title"], "Hello again");
}

#[tokio::test]
async fn test_update_with_blank_fields_keeps_values() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .put(&format!("/upposts/{post_id}"))
        .add_header(name, value)
        .json(&json!({ "title": "", "content": "Updated content" }))
        .await;
    let body = assert_envelope(&response, StatusCode::OK, "post updated successfully");

    assert_eq!(body["data"]["title"], "Hello");
    assert_eq!(body["data"]["content"], "Updated content");
}

#[tokio::test]
async fn test_update_other_users_post_is_forbidden() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let mallory = app.create_test_user("mallory").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&mallory.token);
    let response = app
        .server
        .put(&format!("/upposts/{post_id}"))
        .add_header(name, value)
        .json(&json!({ "title": "Hijacked" }))
        .await;
    assert_envelope(&response, StatusCode::FORBIDDEN, "you can only update your own posts");

    let fetched: Value = app.server.get(&format!("/posts/{post_id}")).await.json();
    assert_eq!(fetched["data"]["title"], "Hello");
}

#[tokio::test]
async fn test_update_missing_post() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .put("/upposts/999")
        .add_header(name, value)
        .json(&json!({ "title": "Nothing here" }))
        .await;
    assert_envelope(&response, StatusCode::NOT_FOUND, "post not found");
}

#[tokio::test]
async fn test_update_with_malformed_body() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .put(&format!("/upposts/{post_id}"))
        .add_header(name, value)
        .json(&json!({ "title": 5 }))
        .await;
    assert_envelope(&response, StatusCode::BAD_REQUEST, "invalid request body");
}

#[tokio::test]
async fn test_delete_own_post() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .delete(&format!("/delposts/{post_id}"))
        .add_header(name, value)
        .await;
    let body = assert_envelope(&response, StatusCode::OK, "post deleted successfully");
    assert!(body.get("data").is_none());

    let fetched = app.server.get(&format!("/posts/{post_id}")).await;
    assert_envelope(&fetched, StatusCode::NOT_FOUND, "post not found");

    let listed: Value = app.server.get("/posts").await.json();
    assert_eq!(listed["data"], json!([]));

    let (name, value) = bearer(&alice.token);
    let again = app
        .server
        .delete(&format!("/delposts/{post_id}"))
        .add_header(name, value)
        .await;
    assert_envelope(&again, StatusCode::NOT_FOUND, "post not found");
}

#[tokio::test]
async fn test_delete_other_users_post_is_forbidden() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let mallory = app.create_test_user("mallory").await;
    let post = app.create_post(&alice, "Hello", "World").await;
    let post_id = post["id"].as_i64().unwrap();

    let (name, value) = bearer(&mallory.token);
    let response = app
        .server
        .delete(&format!("/delposts/{post_id}"))
        .add_header(name, value)
        .await;
    assert_envelope(&response, StatusCode::FORBIDDEN, "you can only delete your own posts");

    app.server
        .get(&format!("/posts/{post_id}"))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_delete_with_invalid_id() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let (name, value) = bearer(&alice.token);
    let response = app
        .server
        .delete("/delposts/not-a-number")
        .add_header(name, value)
        .await;
    assert_envelope(&response, StatusCode::BAD_REQUEST, "invalid path parameter");
}
