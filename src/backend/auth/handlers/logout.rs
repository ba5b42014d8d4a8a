/**
 * Logout Handler
 *
 * POST /api/auth/logout revokes the presented token. Other tokens of the
 * same user stay valid.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::revocation::{cleanup_expired_revocations, revoke_token};
use crate::backend::error::BackendError;
use crate::backend::messages::{self, MessageResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;

/// Logout handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing, invalid or already revoked token
pub async fn logout(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = require_pool(pool)?;

    revoke_token(&pool, &user.jti, user.user_id, user.expires_at).await?;
    tracing::info!("User {} logged out", user.user_id);

    match cleanup_expired_revocations(&pool).await {
        Ok(0) => {}
        Ok(removed) => tracing::debug!("Removed {} expired token revocations", removed),
        Err(e) => tracing::warn!("Failed to clean up expired revocations: {:?}", e),
    }

    Ok(Json(MessageResponse::new(messages::LOGGED_OUT)))
}
