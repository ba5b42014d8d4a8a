//! Comment API integration tests

use axum::http::StatusCode;
use board::backend::messages;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_comment, create_post, create_test_user, TestApp, TEST_APP_URL};

#[tokio::test]
async fn test_create_and_list_comments() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;

    let response = app
        .server
        .post(&format!("/api/posts/{post_id}/comments"))
        .authorization_bearer(&bob.token)
        .json(&json!({ "content": "first" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], messages::COMMENT_CREATED);
    assert_eq!(body["post_id"], post_id);
    assert!(body["comment_id"].as_i64().is_some());

    create_comment(&app, &alice, post_id, "second").await;

    let list = app
        .server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    let page = &list["comments"];
    assert_eq!(page["total"], 2);
    assert_eq!(page["data"][0]["content"], "first");
    assert_eq!(page["data"][0]["user"]["nickname"], "bob");
    assert_eq!(page["data"][1]["content"], "second");
    assert_eq!(page["path"], format!("{TEST_APP_URL}/api/posts/{post_id}/comments"));
}

#[tokio::test]
async fn test_comment_on_missing_or_deleted_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;

    let response = app
        .server
        .post("/api/posts/999/comments")
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "hello" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    app.server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice.token)
        .await;

    let response = app
        .server
        .post(&format!("/api/posts/{post_id}/comments"))
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "hello" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::POST_NOT_FOUND);

    assert_eq!(app.count_rows("comments").await, 0);
}

#[tokio::test]
async fn test_comment_validation() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;
    let path = format!("/api/posts/{post_id}/comments");

    let response = app
        .server
        .post(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({}))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::COMMENT_CONTENT_REQUIRED);

    let response = app
        .server
        .post(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "x".repeat(256) }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, messages::COMMENT_TOO_LONG);

    let response = app
        .server
        .post(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "x".repeat(255) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_only_author_can_update_or_delete_comment() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;
    let comment_id = create_comment(&app, &bob, post_id, "bob's comment").await;
    let path = format!("/api/posts/{post_id}/comments/{comment_id}");

    // The post's author does not own the comment
    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "edited by alice" }))
        .await;
    assert_message!(response, StatusCode::FORBIDDEN, messages::FORBIDDEN);

    let response = app.server.delete(&path).authorization_bearer(&alice.token).await;
    assert_message!(response, StatusCode::FORBIDDEN, messages::FORBIDDEN);

    // Rejected attempts leave the comment untouched and live
    let list = app
        .server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    assert_eq!(list["comments"]["total"], 1);
    assert_eq!(list["comments"]["data"][0]["content"], "bob's comment");
    assert_eq!(list["comments"]["data"][0]["deleted_at"], Value::Null);

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&bob.token)
        .json(&json!({ "content": "edited" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["message"], messages::COMMENT_UPDATED);
    assert_eq!(body["comment"]["content"], "edited");
    assert_eq!(body["comment"]["post_id"], post_id);
}

#[tokio::test]
async fn test_comment_must_match_post() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post_a = create_post(&app, &alice, "A", "Body").await;
    let post_b = create_post(&app, &alice, "B", "Body").await;
    let comment_id = create_comment(&app, &alice, post_a, "on A").await;

    let response = app
        .server
        .patch(&format!("/api/posts/{post_b}/comments/{comment_id}"))
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "moved" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::COMMENT_NOT_FOUND);

    let response = app
        .server
        .delete(&format!("/api/posts/{post_b}/comments/{comment_id}"))
        .authorization_bearer(&alice.token)
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::COMMENT_NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_comment_behaves_like_missing() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;
    let comment_id = create_comment(&app, &alice, post_id, "soon gone").await;
    create_comment(&app, &alice, post_id, "stays").await;
    let path = format!("/api/posts/{post_id}/comments/{comment_id}");

    let response = app.server.delete(&path).authorization_bearer(&alice.token).await;
    assert_message!(response, StatusCode::OK, messages::DELETED);

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "revived" }))
        .await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::COMMENT_NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&alice.token).await;
    assert_message!(response, StatusCode::NOT_FOUND, messages::COMMENT_NOT_FOUND);

    let list = app
        .server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    assert_eq!(list["comments"]["total"], 1);
    assert_eq!(list["comments"]["data"][0]["content"], "stays");
}

#[tokio::test]
async fn test_comment_list_pages() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let post_id = create_post(&app, &alice, "Post", "Body").await;
    for n in 1..=11 {
        create_comment(&app, &alice, post_id, &format!("comment {n}")).await;
    }

    let second = app
        .server
        .get(&format!("/api/posts/{post_id}/comments"))
        .add_query_param("page", 2)
        .await
        .json::<Value>();
    let page = &second["comments"];
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["from"], 11);
    assert_eq!(page["data"][0]["content"], "comment 11");
    assert_eq!(
        page["prev_page_url"],
        format!("{TEST_APP_URL}/api/posts/{post_id}/comments?page=1")
    );
}
