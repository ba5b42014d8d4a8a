/**
 * Comment Handlers
 *
 * # Routes
 *
 * - `GET /api/posts/{postId}/comments?page=n` - Paginated list, oldest first
 * - `POST /api/posts/{postId}/comments` - Create (requires authentication)
 * - `PATCH /api/posts/{postId}/comments/{commentId}` - Update (author only)
 * - `DELETE /api/posts/{postId}/comments/{commentId}` - Soft delete (author only)
 */

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::comments::service;
use crate::backend::comments::types::{
    CommentCreatedResponse, CommentListQuery, CommentListResponse, CommentRequest,
    CommentUpdatedResponse,
};
use crate::backend::content::CommentKey;
use crate::backend::error::BackendError;
use crate::backend::messages::{self, MessageResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;
use crate::shared::error::parse_id;
use crate::shared::{AppConfig, PageRequest, PostId};

fn parse_comment_key(post_id: &str, comment_id: &str) -> Result<CommentKey, BackendError> {
    Ok(CommentKey {
        post_id: parse_id("postId", post_id)?,
        comment_id: parse_id("commentId", comment_id)?,
    })
}

/// List a post's live comments
pub async fn list_comments(
    State(pool): State<Option<SqlitePool>>,
    State(config): State<Arc<AppConfig>>,
    Path(post_id): Path<String>,
    query: Result<Query<CommentListQuery>, QueryRejection>,
) -> Result<Json<CommentListResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let post_id: PostId = parse_id("postId", &post_id)?;
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let page = PageRequest::from_query(
        query.page.as_deref(),
        config.url(&format!("/api/posts/{}/comments", post_id)),
        "page",
    );
    let comments = service::list_comments(&pool, post_id, &page).await?;

    Ok(Json(CommentListResponse { comments }))
}

/// Comment on a live post
///
/// # Errors
///
/// * `400 Bad Request` - Malformed post id, malformed body or validation failure
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The post is missing or deleted
pub async fn create_comment(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentCreatedResponse>), BackendError> {
    let pool = require_pool(pool)?;
    let post_id: PostId = parse_id("postId", &post_id)?;
    let Json(request) = payload?;

    let comment_id = service::create_comment(&pool, user.user_id, post_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            message: messages::COMMENT_CREATED,
            post_id,
            comment_id,
        }),
    ))
}

/// Replace a comment's content
pub async fn update_comment(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<Json<CommentUpdatedResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let key = parse_comment_key(&post_id, &comment_id)?;
    let Json(request) = payload?;

    let comment = service::update_comment(&pool, user.user_id, key, request).await?;

    Ok(Json(CommentUpdatedResponse {
        message: messages::COMMENT_UPDATED,
        comment,
    }))
}

/// Soft-delete a comment
pub async fn delete_comment(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let key = parse_comment_key(&post_id, &comment_id)?;

    service::delete_comment(&pool, user.user_id, key).await?;

    Ok(Json(MessageResponse::new(messages::DELETED)))
}
