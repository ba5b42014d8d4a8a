/**
 * Post Operations
 *
 * Each mutation runs in a fixed order: ownership policy (404, then 403),
 * then validation (400), then the guarded write. Creation has no record to
 * check and validates first.
 */

use sqlx::SqlitePool;

use crate::backend::content::policy::{resolve_for_mutation, resolve_for_read};
use crate::backend::content::PostKey;
use crate::backend::error::BackendError;
use crate::backend::messages;
use crate::backend::posts::db::{self, Post};
use crate::backend::posts::types::PostRequest;
use crate::shared::validation::{field, normalize_text};
use crate::shared::{PageRequest, Paginated, PostId, UserId, ValidationErrors};

/// Title and content after trimming and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
}

/// Trim and validate a post body
///
/// Title is checked before content; both are required, title is at most
/// 255 characters.
pub fn validate_post(request: PostRequest) -> Result<PostFields, ValidationErrors> {
    let title = normalize_text(request.title);
    let content = normalize_text(request.content);

    ValidationErrors::check([
        field("title", title.as_deref())
            .required(messages::TITLE_REQUIRED)
            .max_chars(255, messages::TITLE_TOO_LONG),
        field("content", content.as_deref()).required(messages::POST_CONTENT_REQUIRED),
    ])?;

    match (title, content) {
        (Some(title), Some(content)) => Ok(PostFields { title, content }),
        // Unreachable once `required` passed for both
        _ => Err(ValidationErrors::default()),
    }
}

pub async fn create_post(
    pool: &SqlitePool,
    requester: UserId,
    request: PostRequest,
) -> Result<PostId, BackendError> {
    let fields = validate_post(request)?;
    let post_id = db::insert_post(pool, requester, &fields.title, &fields.content).await?;
    tracing::info!("User {} created post {}", requester, post_id);
    Ok(post_id)
}

pub async fn list_posts(
    pool: &SqlitePool,
    page: &PageRequest,
) -> Result<Paginated<Post>, BackendError> {
    let total = db::count_live_posts(pool).await?;
    let posts = db::list_live_posts(pool, page.limit(), page.offset()).await?;
    Ok(Paginated::new(posts, u64::try_from(total).unwrap_or(0), page))
}

pub async fn show_post(pool: &SqlitePool, post_id: PostId) -> Result<Post, BackendError> {
    resolve_for_read::<Post>(pool, PostKey { post_id })
        .await?
        .found_or(BackendError::post_not_found)
}

/// Replace title and content; only the author may do this
pub async fn update_post(
    pool: &SqlitePool,
    requester: UserId,
    post_id: PostId,
    request: PostRequest,
) -> Result<Post, BackendError> {
    resolve_for_mutation::<Post>(pool, PostKey { post_id }, requester)
        .await?
        .authorized_or(BackendError::post_not_found)?;

    let fields = validate_post(request)?;

    if !db::update_live_post(pool, post_id, &fields.title, &fields.content).await? {
        return Err(BackendError::post_not_found());
    }
    tracing::info!("User {} updated post {}", requester, post_id);

    db::find_live_post(pool, post_id)
        .await?
        .ok_or_else(BackendError::post_not_found)
}

/// Soft-delete a post; only the author may do this
pub async fn delete_post(
    pool: &SqlitePool,
    requester: UserId,
    post_id: PostId,
) -> Result<(), BackendError> {
    resolve_for_mutation::<Post>(pool, PostKey { post_id }, requester)
        .await?
        .authorized_or(BackendError::post_not_found)?;

    if !db::soft_delete_post(pool, post_id).await? {
        return Err(BackendError::post_not_found());
    }
    tracing::info!("User {} deleted post {}", requester, post_id);
    Ok(())
}
