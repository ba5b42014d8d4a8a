/**
 * Comment Operations
 *
 * Creating a comment first requires its post to be live (404 with the post
 * message), then validates the content. Update and delete run the
 * ownership policy (404 with the comment message, then 403) before
 * validation and the guarded write.
 */

use sqlx::SqlitePool;

use crate::backend::comments::db::{self, Comment};
use crate::backend::comments::types::CommentRequest;
use crate::backend::content::policy::{resolve_for_mutation, resolve_for_read};
use crate::backend::content::{CommentKey, PostKey};
use crate::backend::error::BackendError;
use crate::backend::messages;
use crate::backend::posts::Post;
use crate::shared::validation::{field, normalize_text};
use crate::shared::{CommentId, PageRequest, Paginated, PostId, UserId, ValidationErrors};

/// Maximum comment length in characters
pub const MAX_COMMENT_CHARS: usize = 255;

/// Trim and validate comment content
pub fn validate_comment(request: CommentRequest) -> Result<String, ValidationErrors> {
    let content = normalize_text(request.content);

    ValidationErrors::check([field("content", content.as_deref())
        .required(messages::COMMENT_CONTENT_REQUIRED)
        .max_chars(MAX_COMMENT_CHARS, messages::COMMENT_TOO_LONG)])?;

    content.ok_or_else(ValidationErrors::default)
}

pub async fn create_comment(
    pool: &SqlitePool,
    requester: UserId,
    post_id: PostId,
    request: CommentRequest,
) -> Result<CommentId, BackendError> {
    resolve_for_read::<Post>(pool, PostKey { post_id })
        .await?
        .found_or(BackendError::post_not_found)?;

    let content = validate_comment(request)?;

    // The post may have been deleted since the lookup
    let comment_id = db::insert_comment(pool, post_id, requester, &content)
        .await?
        .ok_or_else(BackendError::post_not_found)?;

    tracing::info!("User {} commented {} on post {}", requester, comment_id, post_id);
    Ok(comment_id)
}

/// List a post's live comments
///
/// The post itself is not checked; a missing post yields an empty page.
pub async fn list_comments(
    pool: &SqlitePool,
    post_id: PostId,
    page: &PageRequest,
) -> Result<Paginated<Comment>, BackendError> {
    let total = db::count_live_comments(pool, post_id).await?;
    let comments = db::list_live_comments(pool, post_id, page.limit(), page.offset()).await?;
    Ok(Paginated::new(comments, u64::try_from(total).unwrap_or(0), page))
}

pub async fn update_comment(
    pool: &SqlitePool,
    requester: UserId,
    key: CommentKey,
    request: CommentRequest,
) -> Result<Comment, BackendError> {
    resolve_for_mutation::<Comment>(pool, key, requester)
        .await?
        .authorized_or(BackendError::comment_not_found)?;

    let content = validate_comment(request)?;

    if !db::update_live_comment(pool, key.post_id, key.comment_id, &content).await? {
        return Err(BackendError::comment_not_found());
    }
    tracing::info!("User {} updated comment {}", requester, key.comment_id);

    db::find_live_comment(pool, key.post_id, key.comment_id)
        .await?
        .ok_or_else(BackendError::comment_not_found)
}

pub async fn delete_comment(
    pool: &SqlitePool,
    requester: UserId,
    key: CommentKey,
) -> Result<(), BackendError> {
    resolve_for_mutation::<Comment>(pool, key, requester)
        .await?
        .authorized_or(BackendError::comment_not_found)?;

    if !db::soft_delete_comment(pool, key.post_id, key.comment_id).await? {
        return Err(BackendError::comment_not_found());
    }
    tracing::info!("User {} deleted comment {}", requester, key.comment_id);
    Ok(())
}
