//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server: row
//! identifiers, request validation, pagination and configuration. The backend
//! builds on them, and they can be unit tested without a database.
//!
//! # Overview
//!
//! - **`ids`** - `UserId`, `PostId`, `CommentId` newtypes
//! - **`validation`** - ordered field rules producing `ValidationErrors`
//! - **`pagination`** - `PageRequest` and the `Paginated<T>` response shape
//! - **`error`** - `SharedError` and path id parsing
//! - **`config`** - `AppConfig` loaded from the environment

/// Typed row identifiers
pub mod ids;

/// Request validation rules
pub mod validation;

/// Page slicing and navigation metadata
pub mod pagination;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use ids::{CommentId, PostId, UserId};
pub use pagination::{PageRequest, Paginated, PAGE_SIZE};
pub use validation::{FieldError, ValidationErrors};
