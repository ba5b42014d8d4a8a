/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * Request fields are optional so a missing field is reported by validation
 * with its own message.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::UserId;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RegisterRequest {
    /// 2-16 characters, unique ignoring case
    pub nickname: Option<String>,
    /// Unique ignoring case
    pub email: Option<String>,
    /// 6-16 characters, stored only as a bcrypt hash
    pub password: Option<String>,
    /// Must equal `password`
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response
///
/// Contains the JWT token and user information for immediate authentication.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    /// Always `"Bearer"`
    pub token_type: &'static str,
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: UserId,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
