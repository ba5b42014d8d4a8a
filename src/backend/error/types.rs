/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler and service
 * function. Each variant knows its HTTP status and the message shown to the
 * client.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - a request field failed its rules (400)
 * - `BadRequest` - a path id or body could not be parsed (400)
 * - `LoginFailed` - unknown email or wrong password (400)
 * - `Unauthenticated` - missing, invalid, expired or revoked token (401)
 * - `Forbidden` - the requester does not own the record (403)
 * - `NotFound` - no live record; never existed and soft-deleted look the same (404)
 * - `Conflict` - nickname or email already registered (409)
 *
 * ## Server Errors
 *
 * `Database`, `Token` and `PasswordHash` wrap library errors. Clients only
 * see a generic message; the detail is logged when the response is built.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::messages;
use crate::shared::{SharedError, ValidationErrors};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use board::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::post_not_found();
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed validation
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Malformed path parameter or request body
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// Credentials did not match a user
    #[error("Login failed")]
    LoginFailed,

    /// No usable bearer token
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Requester is not the author
    #[error("Forbidden")]
    Forbidden,

    /// No live record matches
    #[error("Not found: {message}")]
    NotFound {
        /// Which resource was missing, as shown to the client
        message: &'static str,
    },

    /// Duplicate nickname or email
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: &'static str,
    },

    /// The server was started without a database
    #[error("Database not configured")]
    ServiceUnavailable,

    /// Malformed path id
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token encoding failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failure
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Generic 400 for malformed requests
    pub fn bad_request() -> Self {
        Self::BadRequest {
            message: messages::BAD_REQUEST.to_string(),
        }
    }

    pub fn post_not_found() -> Self {
        Self::NotFound {
            message: messages::POST_NOT_FOUND,
        }
    }

    pub fn comment_not_found() -> Self {
        Self::NotFound {
            message: messages::COMMENT_NOT_FOUND,
        }
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::Conflict { message }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `BadRequest`, `LoginFailed` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `ServiceUnavailable` - 503 Service Unavailable
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `Token`, `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::BadRequest { .. }
            | Self::LoginFailed
            | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to the client
    ///
    /// Server-side failures never leak their detail here.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .first_message()
                .unwrap_or(messages::BAD_REQUEST)
                .to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::LoginFailed => messages::LOGIN_FAILED.to_string(),
            Self::Unauthenticated => messages::UNAUTHENTICATED.to_string(),
            Self::Forbidden => messages::FORBIDDEN.to_string(),
            Self::NotFound { message } => message.to_string(),
            Self::Conflict { message } => message.to_string(),
            Self::ServiceUnavailable => messages::SERVICE_UNAVAILABLE.to_string(),
            Self::SharedError(_) => messages::BAD_REQUEST.to_string(),
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                messages::SERVER_ERROR.to_string()
            }
        }
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
