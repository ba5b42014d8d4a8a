/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extracting it:
 * 1. Reads the `Authorization: Bearer <token>` header
 * 2. Verifies the token signature and expiry
 * 3. Rejects tokens revoked at logout
 * 4. Checks the user still exists
 *
 * Any failure is a 401 with `{"message": "Unauthenticated."}`. Because the
 * extractor runs before the handler body, authentication is always decided
 * before path parsing, lookups or validation.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::auth::revocation::is_jti_revoked;
use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::{require_pool, AppState};
use crate::shared::UserId;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    /// Token id, used to revoke this token at logout
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Axum extractor for authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

/// Token from an `Authorization` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                BackendError::Unauthenticated
            })?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::Unauthenticated
        })?;

        let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::Unauthenticated
        })?;

        let (user_id, expires_at) = match (claims.user_id(), claims.expires_at()) {
            (Some(user_id), Some(expires_at)) => (user_id, expires_at),
            _ => {
                tracing::warn!("Malformed claims in token: sub={:?}", claims.sub);
                return Err(BackendError::Unauthenticated);
            }
        };

        let pool = require_pool(state.db_pool.clone())?;
        ensure_session_active(&pool, &claims.jti, user_id).await?;

        Ok(AuthUser(AuthenticatedUser {
            user_id,
            jti: claims.jti,
            expires_at,
        }))
    }
}

/// Reject revoked tokens and tokens of users that no longer exist
async fn ensure_session_active(
    pool: &SqlitePool,
    jti: &str,
    user_id: UserId,
) -> Result<(), BackendError> {
    if is_jti_revoked(pool, jti).await? {
        tracing::warn!("Revoked token presented for user {}", user_id);
        return Err(BackendError::Unauthenticated);
    }

    if get_user_by_id(pool, user_id).await?.is_none() {
        tracing::warn!("User not found in database: {}", user_id);
        return Err(BackendError::Unauthenticated);
    }

    Ok(())
}
