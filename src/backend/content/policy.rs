/**
 * Authorization & Visibility Policy
 *
 * Every read or mutation of a post or comment goes through this module
 * first. A lookup only ever sees live records, so a soft-deleted record and
 * one that never existed produce the same `NotFound`. Mutations additionally
 * require the requester to be the author.
 *
 * # Outcomes
 *
 * - `resolve_for_read` - `Lookup::{NotFound, Found}`
 * - `resolve_for_mutation` - `Access::{NotFound, Forbidden, Authorized}`
 *
 * The policy never writes. Callers perform the mutation afterwards with a
 * statement that repeats the `deleted_at IS NULL` guard, so a record deleted
 * between the check and the write still reports `NotFound`.
 *
 * # Lookup keys
 *
 * The key type names the entity. A comment can only be addressed together
 * with its parent post id; a comment under a different post is `NotFound`.
 */

use std::future::Future;

use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::{CommentId, PostId, UserId};

/// A record governed by the ownership policy
pub trait Resource: Sized + Send {
    /// Typed lookup key for this record kind
    type Key: Copy + Send + Sync + std::fmt::Debug;

    /// Fetch the record only if it is live
    fn find_live(
        pool: &SqlitePool,
        key: Self::Key,
    ) -> impl Future<Output = Result<Option<Self>, sqlx::Error>> + Send;

    fn author_id(&self) -> UserId;
}

/// Key addressing a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostKey {
    pub post_id: PostId,
}

/// Key addressing a comment under its parent post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentKey {
    pub post_id: PostId,
    pub comment_id: CommentId,
}

/// Outcome of a read lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<R> {
    NotFound,
    Found(R),
}

/// Outcome of a mutation check
#[derive(Debug, Clone, PartialEq)]
pub enum Access<R> {
    /// No live record matches the key
    NotFound,
    /// The record exists but belongs to someone else
    Forbidden,
    /// The requester owns the record
    Authorized(R),
}

impl<R> Lookup<R> {
    /// Map `NotFound` to the given error
    pub fn found_or(self, not_found: impl FnOnce() -> BackendError) -> Result<R, BackendError> {
        match self {
            Lookup::Found(record) => Ok(record),
            Lookup::NotFound => Err(not_found()),
        }
    }
}

impl<R> Access<R> {
    /// Map `NotFound` to the given error and `Forbidden` to 403
    pub fn authorized_or(
        self,
        not_found: impl FnOnce() -> BackendError,
    ) -> Result<R, BackendError> {
        match self {
            Access::Authorized(record) => Ok(record),
            Access::Forbidden => Err(BackendError::Forbidden),
            Access::NotFound => Err(not_found()),
        }
    }
}

/// Decide access to an already-fetched live record
pub fn authorize<R: Resource>(record: Option<R>, requester: UserId) -> Access<R> {
    match record {
        None => Access::NotFound,
        Some(record) if record.author_id() == requester => Access::Authorized(record),
        Some(_) => Access::Forbidden,
    }
}

/// Look up a live record for display
pub async fn resolve_for_read<R: Resource>(
    pool: &SqlitePool,
    key: R::Key,
) -> Result<Lookup<R>, sqlx::Error> {
    Ok(match R::find_live(pool, key).await? {
        Some(record) => Lookup::Found(record),
        None => Lookup::NotFound,
    })
}

/// Look up a live record and check that `requester` owns it
pub async fn resolve_for_mutation<R: Resource>(
    pool: &SqlitePool,
    key: R::Key,
    requester: UserId,
) -> Result<Access<R>, sqlx::Error> {
    let record = R::find_live(pool, key).await?;
    let access = authorize(record, requester);
    if matches!(access, Access::Forbidden) {
        tracing::warn!("User {} denied mutation of {:?}", requester, key);
    }
    Ok(access)
}
