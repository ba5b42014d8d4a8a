/**
 * Embedded Author
 *
 * Posts and comments carry a small `user` object so clients can show who
 * wrote them without a second request.
 */

use serde::Serialize;

use crate::shared::UserId;

/// Public view of a record's author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: UserId,
    pub nickname: String,
}
