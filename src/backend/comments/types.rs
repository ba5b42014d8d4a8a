/**
 * Comment Handler Types
 */

use serde::{Deserialize, Serialize};

use crate::backend::comments::db::Comment;
use crate::shared::{CommentId, Paginated, PostId};

/// Create or update request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CommentRequest {
    pub content: Option<String>,
}

/// Query string of the comment list
#[derive(Deserialize, Debug, Default)]
pub struct CommentListQuery {
    pub page: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CommentListResponse {
    pub comments: Paginated<Comment>,
}

#[derive(Serialize, Debug)]
pub struct CommentCreatedResponse {
    pub message: &'static str,
    pub post_id: PostId,
    pub comment_id: CommentId,
}

#[derive(Serialize, Debug)]
pub struct CommentUpdatedResponse {
    pub message: &'static str,
    pub comment: Comment,
}
