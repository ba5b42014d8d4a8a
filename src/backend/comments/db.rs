/**
 * Comment Model and Database Operations
 *
 * A comment is always addressed together with its post id. Lookups and
 * writes only touch live comments; a comment can only be inserted while its
 * post is live.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::content::{Author, CommentKey, RecordState, Resource};
use crate::shared::{CommentId, PostId, UserId};

/// A comment with its author embedded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub post_id: PostId,
    #[serde(rename = "user_id")]
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deleted_at")]
    pub state: RecordState,
    pub user: Author,
}

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: CommentId,
    post_id: PostId,
    user_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    nickname: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            content: row.content,
            post_id: row.post_id,
            author_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            state: RecordState::from(row.deleted_at),
            user: Author {
                id: row.user_id,
                nickname: row.nickname,
            },
        }
    }
}

const SELECT_COMMENT: &str = r#"
    SELECT c.id, c.post_id, c.user_id, c.content, c.created_at, c.updated_at, c.deleted_at, u.nickname
    FROM comments c
    JOIN users u ON u.id = c.user_id
"#;

impl Resource for Comment {
    type Key = CommentKey;

    async fn find_live(pool: &SqlitePool, key: CommentKey) -> Result<Option<Self>, sqlx::Error> {
        find_live_comment(pool, key.post_id, key.comment_id).await
    }

    fn author_id(&self) -> UserId {
        self.author_id
    }
}

/// Insert a comment if, and only if, the post is live
///
/// # Returns
/// The new id, or `None` when the post is missing or deleted
pub async fn insert_comment(
    pool: &SqlitePool,
    post_id: PostId,
    author_id: UserId,
    content: &str,
) -> Result<Option<CommentId>, sqlx::Error> {
    let now = Utc::now();

    let id = sqlx::query_scalar::<_, CommentId>(
        r#"
        INSERT INTO comments (post_id, user_id, content, created_at, updated_at)
        SELECT ?, ?, ?, ?, ?
        WHERE EXISTS (SELECT 1 FROM posts WHERE id = ? AND deleted_at IS NULL)
        RETURNING id
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(content)
    .bind(now)
    .bind(now)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

/// Get a live comment under the given post
pub async fn find_live_comment(
    pool: &SqlitePool,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<Option<Comment>, sqlx::Error> {
    let sql = format!("{SELECT_COMMENT} WHERE c.id = ? AND c.post_id = ? AND c.deleted_at IS NULL");
    let row = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Comment::from))
}

/// One page of a post's live comments, oldest first
pub async fn list_live_comments(
    pool: &SqlitePool,
    post_id: PostId,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let sql = format!(
        "{SELECT_COMMENT} WHERE c.post_id = ? AND c.deleted_at IS NULL ORDER BY c.id ASC LIMIT ? OFFSET ?"
    );
    let rows = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Comment::from).collect())
}

pub async fn count_live_comments(pool: &SqlitePool, post_id: PostId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM comments WHERE post_id = ? AND deleted_at IS NULL",
    )
    .bind(post_id)
    .fetch_one(pool)
    .await
}

/// Replace the content of a live comment
///
/// # Returns
/// `false` if the comment is missing or was deleted
pub async fn update_live_comment(
    pool: &SqlitePool,
    post_id: PostId,
    comment_id: CommentId,
    content: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE comments
        SET content = ?, updated_at = ?
        WHERE id = ? AND post_id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(content)
    .bind(Utc::now())
    .bind(comment_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Tombstone a live comment
pub async fn soft_delete_comment(
    pool: &SqlitePool,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        UPDATE comments
        SET deleted_at = ?, updated_at = ?
        WHERE id = ? AND post_id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(now)
    .bind(now)
    .bind(comment_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
