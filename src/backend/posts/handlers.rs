/**
 * Post Handlers
 *
 * HTTP handlers for `/api/posts`. Handlers parse the path and body, call
 * into `service`, and shape the JSON response.
 *
 * # Routes
 *
 * - `GET /api/posts?pageNumber=n` - Paginated list, newest first
 * - `GET /api/posts/{postId}` - Single post
 * - `POST /api/posts` - Create (requires authentication)
 * - `PATCH /api/posts/{postId}` - Update (author only)
 * - `DELETE /api/posts/{postId}` - Soft delete (author only)
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

use crate::backend::error::BackendError;
use crate::backend::messages::{self, MessageResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::service;
use crate::backend::posts::types::{
    PostCreatedResponse, PostListQuery, PostListResponse, PostRequest, PostResponse,
    PostUpdatedResponse,
};
use crate::backend::server::state::require_pool;
use crate::shared::error::parse_id;
use crate::shared::{AppConfig, PageRequest, PostId};

const POSTS_PATH: &str = "/api/posts";

/// List live posts
///
/// An unparseable query string is treated as page 1.
pub async fn list_posts(
    State(pool): State<Option<SqlitePool>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<PostListQuery>, QueryRejection>,
) -> Result<Json<PostListResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let page = PageRequest::from_query(
        query.page_number.as_deref(),
        config.url(POSTS_PATH),
        "pageNumber",
    );
    let posts = service::list_posts(&pool, &page).await?;

    Ok(Json(PostListResponse { posts }))
}

/// Show one live post
pub async fn show_post(
    State(pool): State<Option<SqlitePool>>,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let post_id: PostId = parse_id("postId", &post_id)?;

    let post = service::show_post(&pool, post_id).await?;
    Ok(Json(PostResponse { post }))
}

/// Create a post owned by the requester
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or validation failure
/// * `401 Unauthorized` - Missing or invalid token
pub async fn create_post(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostCreatedResponse>), BackendError> {
    let pool = require_pool(pool)?;
    let Json(request) = payload?;

    let post_id = service::create_post(&pool, user.user_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            message: messages::POST_CREATED,
            post_id,
        }),
    ))
}

/// Replace a post's title and content
///
/// # Errors
///
/// * `400 Bad Request` - Malformed id, malformed body or validation failure
/// * `401 Unauthorized` - Missing or invalid token
/// * `403 Forbidden` - Requester is not the author
/// * `404 Not Found` - No live post with this id
pub async fn update_post(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<PostUpdatedResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let post_id: PostId = parse_id("postId", &post_id)?;
    let Json(request) = payload?;

    let post = service::update_post(&pool, user.user_id, post_id, request).await?;

    Ok(Json(PostUpdatedResponse {
        message: messages::POST_UPDATED,
        post,
    }))
}

/// Soft-delete a post
pub async fn delete_post(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let post_id: PostId = parse_id("postId", &post_id)?;

    service::delete_post(&pool, user.user_id, post_id).await?;

    Ok(Json(MessageResponse::new(messages::DELETED)))
}
