/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Every token carries a random `jti` so a single token can be revoked at
 * logout without affecting the user's other sessions.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Token id, the revocation handle
    pub jti: String,
}

impl Claims {
    /// User id from `sub`, if it is numeric
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// A freshly minted token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID
/// * `email` - User email
/// * `secret` - HMAC signing secret
/// * `ttl` - Token lifetime
///
/// # Returns
/// Signed token with its id and expiry
pub fn create_token(
    user_id: UserId,
    email: &str,
    secret: &str,
    ttl: Duration,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + ttl;
    let jti = uuid::Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
        jti: jti.clone(),
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::default(), &claims, &key)?;

    Ok(IssuedToken {
        token,
        jti,
        expires_at,
    })
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string
/// * `secret` - HMAC signing secret
///
/// # Returns
/// Decoded claims, or an error for a bad signature or an expired token
///
/// No leeway past `exp`: revocation rows are dropped once `exp` passes, so
/// an expired token must already fail here.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
