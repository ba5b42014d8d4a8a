//! Authentication API integration tests
//!
//! Tests for registration, availability checks, login and logout.

use axum::http::StatusCode;
use board::backend::messages;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_test_user, login, register, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;
    assert_message!(response, StatusCode::CREATED, messages::REGISTERED);
    assert_eq!(app.count_rows("users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email_ignores_case() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;

    let response = register(&app.server, "alice2", "ALICE@Example.com", TEST_PASSWORD).await;
    assert_message!(response, StatusCode::CONFLICT, messages::EMAIL_TAKEN);
    assert_eq!(app.count_rows("users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_nickname() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;

    let response = register(&app.server, "Alice", "other@example.com", TEST_PASSWORD).await;
    assert_message!(response, StatusCode::CONFLICT, messages::NICKNAME_TAKEN);
}

#[tokio::test]
async fn test_register_validation_messages() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "nickname": "alice",
            "email": "alice@example.com",
            "password": "password123",
            "confirmPassword": "password124",
        }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::CONFIRM_PASSWORD_MISMATCH);

    let response = register(&app.server, "alice", "not-an-email", TEST_PASSWORD).await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::EMAIL_MALFORMED);

    let response = register(&app.server, "alice", "alice@example.com", "short").await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::PASSWORD_TOO_SHORT);

    assert_eq!(app.count_rows("users").await, 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/register")
        .content_type("application/json")
        .bytes("{\"nickname\":".into())
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_checks() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;

    let response = app.server.get("/api/auth/nickname/bob/exists").await;
    assert_message!(response, StatusCode::OK, messages::NICKNAME_AVAILABLE);

    let response = app.server.get("/api/auth/nickname/ALICE/exists").await;
    assert_message!(response, StatusCode::CONFLICT, messages::NICKNAME_TAKEN);

    let response = app.server.get("/api/auth/nickname/a/exists").await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::CHECK_NICKNAME_TOO_SHORT);

    let response = app.server.get("/api/auth/email/bob@example.com/exists").await;
    assert_message!(response, StatusCode::OK, messages::EMAIL_AVAILABLE);

    let response = app.server.get("/api/auth/email/alice@example.com/exists").await;
    assert_message!(response, StatusCode::CONFLICT, messages::EMAIL_TAKEN);

    let response = app.server.get("/api/auth/email/nope/exists").await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::CHECK_EMAIL_MALFORMED);
}

#[tokio::test]
async fn test_login_success_hides_password_hash() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;

    let body = login(&app.server, "alice@example.com", TEST_PASSWORD).await;
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["nickname"], "alice");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "alice@example.com", TEST_PASSWORD).await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "wrong-password" }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::LOGIN_FAILED);

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::LOGIN_FAILED);

    let response = app.server.post("/api/auth/login").json(&json!({})).await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::EMAIL_REQUIRED);
}

#[tokio::test]
async fn test_logout_revokes_only_that_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "alice").await;
    let second: Value = login(&app.server, &user.email, TEST_PASSWORD).await;
    let second_token = second["token"].as_str().unwrap().to_string();

    let response = app
        .server
        .post("/api/auth/logout")
        .authorization_bearer(&user.token)
        .await;
    assert_message!(response, StatusCode::OK, messages::LOGGED_OUT);

    // The revoked token is rejected everywhere
    let response = app
        .server
        .post("/api/auth/logout")
        .authorization_bearer(&user.token)
        .await;
    assert_message!(response, StatusCode::UNAUTHORIZED, messages::UNAUTHENTICATED);

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "t", "content": "c" }))
        .await;
    assert_message!(response, StatusCode::UNAUTHORIZED, messages::UNAUTHENTICATED);

    // Another session of the same user still works
    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&second_token)
        .json(&json!({ "title": "t", "content": "c" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_missing_or_invalid_token() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/auth/logout").await;
    assert_message!(response, StatusCode::UNAUTHORIZED, messages::UNAUTHENTICATED);

    let response = app
        .server
        .post("/api/auth/logout")
        .authorization_bearer("not-a-jwt")
        .await;
    assert_message!(response, StatusCode::UNAUTHORIZED, messages::UNAUTHENTICATED);
}

#[tokio::test]
async fn test_without_database() {
    let server = TestApp::without_database();

    let response = register(&server, "alice", "alice@example.com", TEST_PASSWORD).await;
    assert_message!(response, StatusCode::SERVICE_UNAVAILABLE, messages::SERVICE_UNAVAILABLE);
}
