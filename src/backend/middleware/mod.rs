//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - `AuthUser` extractor for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use board::backend::middleware::AuthUser;
//!
//! async fn handler(AuthUser(user): AuthUser) {
//!     let _requester = user.user_id;
//! }
//! ```

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
