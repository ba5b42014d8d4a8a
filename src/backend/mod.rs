//! Backend Module
//!
//! This module contains all server-side code for the board: an Axum HTTP
//! server exposing a JSON API over a SQLite database.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, logout, JWT tokens, user storage
//! - **`middleware`** - The `AuthUser` bearer token extractor
//! - **`content`** - Authorship and soft delete rules shared by posts and comments
//! - **`posts`** - Post storage, service and handlers
//! - **`comments`** - Comment storage, service and handlers
//! - **`messages`** - Client-facing response messages
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── messages.rs     - Response messages
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── content/        - Ownership and visibility policy
//! ├── posts/          - Posts
//! ├── comments/       - Comments
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A mutating request on a post or comment is checked in a fixed order:
//!
//! 1. Bearer token (401)
//! 2. Path ids and JSON body syntax (400)
//! 3. Target exists and is live (404)
//! 4. Requester is the author (403)
//! 5. Field validation (400)
//! 6. Guarded write that only touches live rows
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. The error renders as
//! `{"message": ...}` with its status code; 5xx details are logged, never sent.
//!
//! # Example
//!
//! ```rust,no_run
//! use board::backend::create_app;
//! use board::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Authorship and lifecycle rules for posts and comments
pub mod content;

/// Posts
pub mod posts;

/// Comments
pub mod comments;

/// Client-facing messages
pub mod messages;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
