//! Envelope assertions
//!
//! Every response carries `{ code, message, ... }` with `code` equal to the
//! HTTP status; these helpers check both at once.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert the status and the envelope message, returning the body
pub fn assert_envelope(response: &TestResponse, status: StatusCode, message: &str) -> Value {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body["code"], status.as_u16(), "envelope code in {body}");
    assert_eq!(body["message"], message, "envelope message in {body}");
    body
}

/// Assert an error envelope with the given status, returning the body
pub fn assert_error(response: &TestResponse, status: StatusCode) -> Value {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body["code"], status.as_u16(), "envelope code in {body}");
    assert!(body["message"].is_string(), "missing message in {body}");
    assert!(body.get("data").is_none(), "error envelope carries data: {body}");
    body
}
