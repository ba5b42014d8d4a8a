/**
 * Token Revocation
 *
 * Logout records the token's `jti` here until the token would have expired
 * anyway. The auth extractor rejects any token whose `jti` is present.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::UserId;

/// Record a revoked token
///
/// Revoking the same token twice is a no-op.
pub async fn revoke_token(
    pool: &SqlitePool,
    jti: &str,
    user_id: UserId,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO revoked_tokens (jti, user_id, expires_at, revoked_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (jti) DO NOTHING
        "#,
    )
    .bind(jti)
    .bind(user_id)
    .bind(expires_at)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Check if a token (by JTI) is revoked
pub async fn is_jti_revoked(pool: &SqlitePool, jti: &str) -> Result<bool, sqlx::Error> {
    let revoked = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM revoked_tokens WHERE jti = ?)",
    )
    .bind(jti)
    .fetch_one(pool)
    .await?;

    Ok(revoked)
}

/// Delete revocation records whose tokens have expired
pub async fn cleanup_expired_revocations(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
