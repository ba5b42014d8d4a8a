//! Board - Main Library
//!
//! A small community board served as a JSON API: users register and log in
//! with bearer tokens, write posts and comment on them. Only the author may
//! edit or delete a post or comment, and deletion is soft: a tombstone
//! timestamp hides the record from every read and write from then on.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the HTTP layer
//!   - Typed ids, validation rules, pagination, configuration
//!   - Error types
//!
//! - **`backend`** - The Axum server
//!   - Router, auth extractor, JSON error responses
//!   - Users, tokens and logout revocation
//!   - Posts and comments with the ownership and visibility policy
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use board::backend::server::init::create_app;
//! use board::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::error::SharedError` for path id parsing, `shared::ValidationErrors`
//!   for field rules
//! - `backend::error::BackendError` for everything a handler can return;
//!   it renders as `{"message": ...}` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
