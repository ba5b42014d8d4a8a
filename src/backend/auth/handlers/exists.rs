/**
 * Availability Checks
 *
 * GET /api/auth/nickname/{nickname}/exists and
 * GET /api/auth/email/{email}/exists let the registration form check a
 * value before submitting. Both compare case-insensitively, like
 * registration itself.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::users::{email_exists, nickname_exists};
use crate::backend::error::BackendError;
use crate::backend::messages::{self, MessageResponse};
use crate::backend::server::state::require_pool;
use crate::shared::validation::{field, normalize_text};
use crate::shared::ValidationErrors;

/// Validate a nickname for the availability check
pub fn validate_nickname(raw: String) -> Result<String, ValidationErrors> {
    let nickname = normalize_text(Some(raw));
    ValidationErrors::check([field("nickname", nickname.as_deref())
        .required(messages::NICKNAME_REQUIRED)
        .min_chars(2, messages::CHECK_NICKNAME_TOO_SHORT)
        .max_chars(16, messages::CHECK_NICKNAME_TOO_LONG)])?;
    nickname.ok_or_else(ValidationErrors::default)
}

/// Validate an email for the availability check
pub fn validate_email(raw: String) -> Result<String, ValidationErrors> {
    let email = normalize_text(Some(raw));
    ValidationErrors::check([field("email", email.as_deref())
        .required(messages::EMAIL_REQUIRED)
        .email(messages::CHECK_EMAIL_MALFORMED)])?;
    email.ok_or_else(ValidationErrors::default)
}

/// Nickname availability
///
/// # Errors
///
/// * `400 Bad Request` - Nickname fails validation
/// * `409 Conflict` - Nickname is taken
pub async fn check_nickname(
    State(pool): State<Option<SqlitePool>>,
    Path(nickname): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let nickname = validate_nickname(nickname)?;

    if nickname_exists(&pool, &nickname).await? {
        return Err(BackendError::conflict(messages::NICKNAME_TAKEN));
    }

    Ok(Json(MessageResponse::new(messages::NICKNAME_AVAILABLE)))
}

/// Email availability
///
/// # Errors
///
/// * `400 Bad Request` - Email fails validation
/// * `409 Conflict` - Email is taken
pub async fn check_email(
    State(pool): State<Option<SqlitePool>>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let email = validate_email(email)?;

    if email_exists(&pool, &email).await? {
        return Err(BackendError::conflict(messages::EMAIL_TAKEN));
    }

    Ok(Json(MessageResponse::new(messages::EMAIL_AVAILABLE)))
}
