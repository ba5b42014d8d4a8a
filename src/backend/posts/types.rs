/**
 * Post Handler Types
 *
 * Request and response bodies for the post endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::posts::db::Post;
use crate::shared::{Paginated, PostId};

/// Create or update request
///
/// Fields are optional so a missing field is reported by validation with
/// its own message rather than as a malformed body.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct PostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Query string of the post list
#[derive(Deserialize, Debug, Default)]
pub struct PostListQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PostListResponse {
    pub posts: Paginated<Post>,
}

#[derive(Serialize, Debug)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Serialize, Debug)]
pub struct PostCreatedResponse {
    pub message: &'static str,
    pub post_id: PostId,
}

#[derive(Serialize, Debug)]
pub struct PostUpdatedResponse {
    pub message: &'static str,
    pub post: Post,
}
