//! Identifier Types
//!
//! Strongly typed row identifiers. Each wraps the SQLite `INTEGER PRIMARY KEY`
//! of its table so a post id can never be passed where a comment id is
//! expected. They serialize as bare integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map($name)
            }
        }
    };
}

row_id!(
    /// Primary key of a row in `users`
    UserId
);
row_id!(
    /// Primary key of a row in `posts`
    PostId
);
row_id!(
    /// Primary key of a row in `comments`
    CommentId
);
