/**
 * API Route Handlers
 *
 * This module defines the JSON API, mounted under `/api` by the router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `POST /auth/logout` - Revoke the presented token
 * - `GET /auth/nickname/{nickname}/exists` - Nickname availability
 * - `GET /auth/email/{email}/exists` - Email availability
 *
 * ## Posts
 * - `GET /posts` - Paginated list (`pageNumber`)
 * - `POST /posts` - Create
 * - `GET /posts/{post_id}` - Show
 * - `PATCH /posts/{post_id}` - Update (author only)
 * - `DELETE /posts/{post_id}` - Soft delete (author only)
 *
 * ## Comments
 * - `GET /posts/{post_id}/comments` - Paginated list (`page`)
 * - `POST /posts/{post_id}/comments` - Create
 * - `PATCH /posts/{post_id}/comments/{comment_id}` - Update (author only)
 * - `DELETE /posts/{post_id}/comments/{comment_id}` - Soft delete (author only)
 */

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{check_email, check_nickname, login, logout, register};
use crate::backend::comments::{create_comment, delete_comment, list_comments, update_comment};
use crate::backend::posts::{create_post, delete_post, list_posts, show_post, update_post};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Authentication
///
/// Routes that need a user take the `AuthUser` extractor, which answers 401
/// before the handler runs:
/// - `POST /auth/logout`
/// - every post and comment route except the two list routes and `GET /posts/{post_id}`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/nickname/{nickname}/exists", get(check_nickname))
        .route("/auth/email/{email}/exists", get(check_email))
        // Post endpoints
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{post_id}",
            get(show_post).patch(update_post).delete(delete_post),
        )
        // Comment endpoints
        .route(
            "/posts/{post_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/posts/{post_id}/comments/{comment_id}",
            patch(update_comment).delete(delete_comment),
        )
}
