/**
 * Post Model and Database Operations
 *
 * Every query here only sees live posts (`deleted_at IS NULL`), and every
 * write repeats that filter so a tombstoned post is never modified.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::content::{Author, PostKey, RecordState, Resource};
use crate::shared::{PostId, UserId};

/// A post with its author embedded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(rename = "user_id")]
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deleted_at")]
    pub state: RecordState,
    pub user: Author,
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: PostId,
    user_id: UserId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    nickname: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
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

const SELECT_POST: &str = r#"
    SELECT p.id, p.user_id, p.title, p.content, p.created_at, p.updated_at, p.deleted_at, u.nickname
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

impl Resource for Post {
    type Key = PostKey;

    async fn find_live(pool: &SqlitePool, key: PostKey) -> Result<Option<Self>, sqlx::Error> {
        find_live_post(pool, key.post_id).await
    }

    fn author_id(&self) -> UserId {
        self.author_id
    }
}

/// Insert a live post and return its id
pub async fn insert_post(
    pool: &SqlitePool,
    author_id: UserId,
    title: &str,
    content: &str,
) -> Result<PostId, sqlx::Error> {
    let now = Utc::now();

    let id = sqlx::query_scalar::<_, PostId>(
        r#"
        INSERT INTO posts (user_id, title, content, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Get a live post by id
pub async fn find_live_post(pool: &SqlitePool, id: PostId) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{SELECT_POST} WHERE p.id = ? AND p.deleted_at IS NULL");
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Post::from))
}

/// One page of live posts, newest first
pub async fn list_live_posts(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!(
        "{SELECT_POST} WHERE p.deleted_at IS NULL ORDER BY p.created_at DESC, p.id DESC LIMIT ? OFFSET ?"
    );
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

pub async fn count_live_posts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE deleted_at IS NULL")
        .fetch_one(pool)
        .await
}

/// Replace title and content of a live post
///
/// # Returns
/// `false` if the post is missing or was deleted
pub async fn update_live_post(
    pool: &SqlitePool,
    id: PostId,
    title: &str,
    content: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = ?, content = ?, updated_at = ?
        WHERE id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Tombstone a live post
///
/// # Returns
/// `false` if the post is missing or was already deleted
pub async fn soft_delete_post(pool: &SqlitePool, id: PostId) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET deleted_at = ?, updated_at = ?
        WHERE id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
