/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate email and password presence
 * 2. Look up user by email (ignoring case)
 * 3. Verify password using bcrypt
 * 4. Generate JWT token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 400 response
 * - User passwords are never logged or returned in responses
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use bcrypt::verify;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::messages;
use crate::backend::server::state::require_pool;
use crate::shared::validation::{field, normalize_secret, normalize_text};
use crate::shared::{AppConfig, ValidationErrors};

/// Validate login input, returning the trimmed email and the password
pub fn validate_login(request: LoginRequest) -> Result<(String, String), ValidationErrors> {
    let email = normalize_text(request.email);
    let password = normalize_secret(request.password);

    ValidationErrors::check([
        field("email", email.as_deref())
            .required(messages::EMAIL_REQUIRED)
            .email(messages::CHECK_EMAIL_MALFORMED),
        field("password", password.as_deref()).required(messages::PASSWORD_REQUIRED),
    ])?;

    email.zip(password).ok_or_else(ValidationErrors::default)
}

/// Login handler
///
/// # Returns
///
/// JSON response with JWT token and user info
///
/// # Errors
///
/// * `400 Bad Request` - Validation failure, unknown email or wrong password
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "Bearer",
///   "user": {
///     "id": 1,
///     "nickname": "alice",
///     "email": "alice@example.com",
///     "created_at": "2025-01-01T00:00:00Z",
///     "updated_at": "2025-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn login(
    State(pool): State<Option<SqlitePool>>,
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let Json(request) = payload?;
    let (email, password) = validate_login(request)?;

    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::LoginFailed
    })?;

    let valid = verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::PasswordHash(e)
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::LoginFailed);
    }

    let issued = create_token(user.id, &user.email, &config.jwt_secret, config.jwt_ttl).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::Token(e)
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.nickname, user.email);

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: "Bearer",
        user: UserResponse::from(user),
    }))
}
