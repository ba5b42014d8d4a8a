//! Post API integration tests
//!
//! Ownership, soft delete visibility and pagination of posts.

use axum::http::StatusCode;
use board::backend::messages;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_post, create_test_user, TestApp, TEST_APP_URL};

#[tokio::test]
async fn test_create_and_show_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "  Hello  ", "content": "First post" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], messages::POST_CREATED);
    let post_id = body["post_id"].as_i64().unwrap();

    let response = app.server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let post = &response.json::<Value>()["post"];
    assert_eq!(post["id"], post_id);
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "First post");
    assert_eq!(post["user_id"], alice.id);
    assert_eq!(post["user"]["nickname"], "alice");
    assert_eq!(post["deleted_at"], Value::Null);
}

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/posts")
        .json(&json!({ "title": "t", "content": "c" }))
        .await;
    assert_message!(response, StatusCode::UNAUTHORIZED, messages::UNAUTHENTICATED);
    assert_eq!(app.count_rows("posts").await, 0);
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "c" }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::TITLE_REQUIRED);

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "가".repeat(256), "content": "c" }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::TITLE_TOO_LONG);

    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "t", "content": "   " }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::POST_CONTENT_REQUIRED);

    assert_eq!(app.count_rows("posts").await, 0);
}

#[tokio::test]
async fn test_only_author_can_update() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let post_id = create_post(&app, &alice, "Original", "Body").await;
    let path = format!("/api/posts/{post_id}");

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&bob.token)
        .json(&json!({ "title": "Hijacked", "content": "Body" }))
        .await;
    assert_message!(response, StatusCode::FORBIDDEN, messages::FORBIDDEN);

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "Edited", "content": "New body" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["message"], messages::POST_UPDATED);
    assert_eq!(body["post"]["title"], "Edited");
    assert_eq!(body["post"]["content"], "New body");

    let shown = app.server.get(&path).await.json::<Value>();
    assert_eq!(shown["post"]["title"], "Edited");
}

#[tokio::test]
async fn test_forbidden_is_checked_before_validation() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let post_id = create_post(&app, &alice, "Original", "Body").await;

    let response = app
        .server
        .patch(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&bob.token)
        .json(&json!({ "title": "" }))
        .await;
    assert_message!(response, StatusCode::FORBIDDEN, messages::FORBIDDEN);
}

#[tokio::test]
async fn test_deleted_post_behaves_like_missing() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let post_id = create_post(&app, &alice, "Doomed", "Body").await;
    let path = format!("/api/posts/{post_id}");

    let response = app.server.delete(&path).authorization_bearer(&bob.token).await;
    assert_message!(response, StatusCode::FORBIDDEN, messages::FORBIDDEN);

    let response = app.server.delete(&path).authorization_bearer(&alice.token).await;
    assert_message!(response, StatusCode::OK, messages::DELETED);

    let response = app.server.get(&path).await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&alice.token).await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    // Not-found wins over not-owner once the post is gone
    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&bob.token)
        .json(&json!({ "title": "t", "content": "c" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    let list = app.server.get("/api/posts").await.json::<Value>();
    assert_eq!(list["posts"]["total"], 0);

    // The row is kept as a tombstone
    assert_eq!(app.count_rows("posts").await, 1);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let response = app.server.get("/api/posts/999").await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    let response = app
        .server
        .patch("/api/posts/999")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "t", "content": "c" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    let response = app.server.get("/api/posts/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    for n in 1..=12 {
        create_post(&app, &alice, &format!("Post {n}"), "Body").await;
    }

    let first = app.server.get("/api/posts").await.json::<Value>();
    let again = app.server.get("/api/posts").await.json::<Value>();
    assert_eq!(first, again);
    let page = &first["posts"];
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["total"], 12);
    assert_eq!(page["per_page"], 10);
    assert_eq!(page["last_page"], 2);
    assert_eq!(page["from"], 1);
    assert_eq!(page["to"], 10);
    assert_eq!(page["data"].as_array().unwrap().len(), 10);
    assert_eq!(page["data"][0]["title"], "Post 12");
    assert_eq!(page["prev_page_url"], Value::Null);
    assert_eq!(
        page["next_page_url"],
        format!("{TEST_APP_URL}/api/posts?pageNumber=2")
    );

    let second = app
        .server
        .get("/api/posts")
        .add_query_param("pageNumber", 2)
        .await
        .json::<Value>();
    let page = &second["posts"];
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["data"][1]["title"], "Post 1");
    assert_eq!(page["next_page_url"], Value::Null);

    let beyond = app
        .server
        .get("/api/posts")
        .add_query_param("pageNumber", 9)
        .await;
    assert_eq!(beyond.status_code(), StatusCode::OK);
    let page = &beyond.json::<Value>()["posts"];
    assert_eq!(page["data"].as_array().unwrap().len(), 0);
    assert_eq!(page["from"], Value::Null);
    assert_eq!(page["last_page"], 2);

    let garbage = app
        .server
        .get("/api/posts")
        .add_query_param("pageNumber", "abc")
        .await
        .json::<Value>();
    assert_eq!(garbage["posts"]["current_page"], 1);
}
