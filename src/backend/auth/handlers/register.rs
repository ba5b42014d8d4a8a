/**
 * Registration Handler
 *
 * This module implements user registration for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Trim inputs (passwords are kept as typed) and validate in order:
 *    nickname, email, password, confirmPassword
 * 2. Reject a taken email, then a taken nickname (409)
 * 3. Hash the password with bcrypt and insert the user
 *
 * Two concurrent registrations can both pass step 2; the UNIQUE keys then
 * reject the second insert, which is reported as the same 409.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::{create_user, email_exists, nickname_exists};
use crate::backend::error::BackendError;
use crate::backend::messages::{self, MessageResponse};
use crate::backend::server::state::require_pool;
use crate::shared::validation::{field, normalize_secret, normalize_text};
use crate::shared::{AppConfig, ValidationErrors};

/// Registration input after normalization and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// Normalize and validate a registration request
pub fn validate_registration(request: RegisterRequest) -> Result<Registration, ValidationErrors> {
    let nickname = normalize_text(request.nickname);
    let email = normalize_text(request.email);
    let password = normalize_secret(request.password);
    let confirm_password = normalize_secret(request.confirm_password);

    ValidationErrors::check([
        field("nickname", nickname.as_deref())
            .required(messages::NICKNAME_REQUIRED)
            .min_chars(2, messages::NICKNAME_TOO_SHORT)
            .max_chars(16, messages::NICKNAME_TOO_LONG),
        field("email", email.as_deref())
            .required(messages::EMAIL_REQUIRED)
            .email(messages::EMAIL_MALFORMED),
        field("password", password.as_deref())
            .required(messages::PASSWORD_REQUIRED)
            .min_chars(6, messages::PASSWORD_TOO_SHORT)
            .max_chars(16, messages::PASSWORD_TOO_LONG),
        field("confirmPassword", confirm_password.as_deref())
            .required(messages::CONFIRM_PASSWORD_REQUIRED)
            .same_as(password.as_deref(), messages::CONFIRM_PASSWORD_MISMATCH),
    ])?;

    match (nickname, email, password) {
        (Some(nickname), Some(email), Some(password)) => Ok(Registration {
            nickname,
            email,
            password,
        }),
        _ => Err(ValidationErrors::default()),
    }
}

/// Map a UNIQUE violation on insert to the matching 409
fn conflict_from_insert(err: sqlx::Error) -> BackendError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            if db.message().contains("email_key") {
                BackendError::conflict(messages::EMAIL_TAKEN)
            } else {
                BackendError::conflict(messages::NICKNAME_TAKEN)
            }
        }
        _ => BackendError::Database(err),
    }
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or the first failing validation rule
/// * `409 Conflict` - Email or nickname already registered
/// * `503 Service Unavailable` - If database is not configured
pub async fn register(
    State(pool): State<Option<SqlitePool>>,
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let pool = require_pool(pool)?;
    let Json(request) = payload?;

    let registration = validate_registration(request)?;
    tracing::info!("Registration request for: {}", registration.email);

    if email_exists(&pool, &registration.email).await? {
        tracing::warn!("Email already registered: {}", registration.email);
        return Err(BackendError::conflict(messages::EMAIL_TAKEN));
    }
    if nickname_exists(&pool, &registration.nickname).await? {
        tracing::warn!("Nickname already registered: {}", registration.nickname);
        return Err(BackendError::conflict(messages::NICKNAME_TAKEN));
    }

    let password_hash = bcrypt::hash(&registration.password, config.bcrypt_cost).map_err(|e| {
        tracing::error!("Password hashing error: {:?}", e);
        BackendError::PasswordHash(e)
    })?;

    let user = create_user(&pool, &registration.nickname, &registration.email, &password_hash)
        .await
        .map_err(conflict_from_insert)?;

    tracing::info!("User registered: {} ({})", user.nickname, user.id);

    Ok((StatusCode::CREATED, Json(MessageResponse::new(messages::REGISTERED))))
}
