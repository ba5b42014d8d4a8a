/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * Nicknames and emails are unique regardless of case. Each row keeps the
 * value as typed plus a lowercase key column carrying the UNIQUE
 * constraint, and every lookup compares keys.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::shared::UserId;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Row id
    pub id: UserId,
    /// Display name as entered at registration
    pub nickname: String,
    /// Email as entered at registration
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Comparison key for nickname and email uniqueness
pub fn unique_key(value: &str) -> String {
    value.to_lowercase()
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `nickname` - Trimmed nickname
/// * `email` - Trimmed email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or a unique violation if the nickname or email is taken
pub async fn create_user(
    pool: &SqlitePool,
    nickname: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (nickname, nickname_key, email, email_key, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, nickname, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(nickname)
    .bind(unique_key(nickname))
    .bind(email)
    .bind(unique_key(email))
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email, ignoring case
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, nickname, email, password_hash, created_at, updated_at
        FROM users
        WHERE email_key = ?
        "#,
    )
    .bind(unique_key(email))
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, nickname, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether any user already holds this nickname, ignoring case
pub async fn nickname_exists(pool: &SqlitePool, nickname: &str) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE nickname_key = ?)",
    )
    .bind(unique_key(nickname))
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Whether any user already holds this email, ignoring case
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE email_key = ?)",
    )
    .bind(unique_key(email))
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
