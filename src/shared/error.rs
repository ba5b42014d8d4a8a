//! Shared Error Types
//!
//! This module defines error types that do not depend on the HTTP layer.
//! They are produced by identifier parsing and are converted into
//! `BackendError` at the handler boundary. Field validation has its own
//! type, `ValidationErrors`.
//!
//! # Error Categories
//!
//! - `InvalidIdentifier` - A path segment is not a valid row id
//!
//! # Usage
//!
//! ```rust
//! use board::shared::error::SharedError;
//!
//! let error = SharedError::invalid_identifier("postId", "abc");
//! assert!(error.to_string().contains("postId"));
//! ```
use thiserror::Error;

/// Errors raised before a request reaches the store
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Path parameter missing or not a valid id
    #[error("Invalid identifier for '{field}': {value:?}")]
    InvalidIdentifier {
        /// Path parameter name
        field: &'static str,
        /// Raw value as received
        value: String,
    },
}

impl SharedError {
    /// Create a new invalid-identifier error
    pub fn invalid_identifier(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            field,
            value: value.into(),
        }
    }
}

/// Parse a path segment into a row id
///
/// Blank or non-numeric segments fail with `InvalidIdentifier` so the
/// request is rejected before any lookup.
pub fn parse_id<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, SharedError> {
    if raw.trim().is_empty() {
        return Err(SharedError::invalid_identifier(field, raw));
    }
    raw.parse::<T>()
        .map_err(|_| SharedError::invalid_identifier(field, raw))
}
