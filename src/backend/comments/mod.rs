//! Comments Module
//!
//! Comments on posts. A comment is always addressed through its post
//! (`/api/posts/{postId}/comments/{commentId}`), can only be created while
//! the post is live, and can only be edited or deleted by its author.
//!
//! # Module Structure
//!
//! ```text
//! comments/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - Comment model and SQL queries
//! ├── service.rs    - Validation and policy-checked operations
//! ├── handlers.rs   - HTTP handlers
//! └── types.rs      - Request/response types
//! ```

/// Comment model and database operations
pub mod db;

/// Comment operations
pub mod service;

/// HTTP handlers
pub mod handlers;

/// Request and response types
pub mod types;

pub use db::Comment;
pub use handlers::{create_comment, delete_comment, list_comments, update_comment};
