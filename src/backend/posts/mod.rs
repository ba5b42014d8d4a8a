//! Posts Module
//!
//! Board posts: paginated listing, detail view, and author-only update and
//! soft delete.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - Post model and SQL queries
//! ├── service.rs    - Validation and policy-checked operations
//! ├── handlers.rs   - HTTP handlers
//! └── types.rs      - Request/response types
//! ```
//!
//! # Lifecycle
//!
//! A post is created live and stays editable by its author until it is
//! deleted. A deleted post answers 404 to everyone and its comments stay in
//! the database untouched.

/// Post model and database operations
pub mod db;

/// Post operations
pub mod service;

/// HTTP handlers
pub mod handlers;

/// Request and response types
pub mod types;

pub use db::Post;
pub use handlers::{create_post, delete_post, list_posts, show_post, update_post};
