//! Authentication test helpers
//!
//! Provides utilities for registering test users through the API and
//! logging them in.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use super::database::TestApp;

pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    pub token: String,
}

/// Register a user through the API
pub async fn register(server: &TestServer, nickname: &str, email: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/api/auth/register")
        .json(&json!({
            "nickname": nickname,
            "email": email,
            "password": password,
            "confirmPassword": password,
        }))
        .await
}

/// Log in and return the response body
pub async fn login(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());
    response.json::<Value>()
}

/// Register and log in a user named `nickname`
pub async fn create_test_user(app: &TestApp, nickname: &str) -> TestUser {
    let email = format!("{nickname}@example.com");
    let response = register(&app.server, nickname, &email, TEST_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "register failed: {}", response.text());

    let body = login(&app.server, &email, TEST_PASSWORD).await;
    TestUser {
        id: body["user"]["id"].as_i64().expect("user id"),
        nickname: nickname.to_string(),
        email,
        token: body["token"].as_str().expect("token").to_string(),
    }
}

/// Create a post as `user` and return its id
pub async fn create_post(app: &TestApp, user: &TestUser, title: &str, content: &str) -> i64 {
    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": title, "content": content }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "create post failed: {}", response.text());
    response.json::<Value>()["post_id"].as_i64().expect("post id")
}

/// Create a comment as `user` and return its id
pub async fn create_comment(app: &TestApp, user: &TestUser, post_id: i64, content: &str) -> i64 {
    let response = app
        .server
        .post(&format!("/api/posts/{post_id}/comments"))
        .authorization_bearer(&user.token)
        .json(&json!({ "content": content }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "create comment failed: {}", response.text());
    response.json::<Value>()["comment_id"].as_i64().expect("comment id")
}
