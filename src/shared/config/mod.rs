//! Application configuration module
//!
//! Provides the configuration consumed by the server: database location,
//! token signing, password hashing cost and the public base URL used in
//! pagination links.
//!
//! Values come from environment variables (a `.env` file is loaded by the
//! binary first) through [`AppConfig::from_env`], or are assembled in code
//! with [`AppConfig::builder`], which is what tests do.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://board.db?mode=rwc` |
//! | `JWT_SECRET` | required in release builds |
//! | `JWT_TTL_MINUTES` | `60` |
//! | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
//! | `SERVER_PORT` | `8000` |
//! | `APP_URL` | `http://localhost:8000` |
//! | `CORS_ORIGIN` | unset (any origin) |

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://board.db?mode=rwc";
pub const DEFAULT_APP_URL: &str = "http://localhost:8000";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_JWT_TTL_MINUTES: i64 = 60;
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Only used by debug builds when `JWT_SECRET` is unset
const DEVELOPMENT_JWT_SECRET: &str = "board-development-secret-change-me";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string for the SQLite database
    pub database_url: String,
    /// HMAC secret for signing bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token
    pub jwt_ttl: chrono::Duration,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// Public base URL, no trailing slash
    pub app_url: String,
    /// Allowed browser origin; any origin when `None`
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(url) = env_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        match env_var("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                builder = builder.jwt_secret(DEVELOPMENT_JWT_SECRET);
            }
            None => return Err(ConfigError::MissingValue("JWT_SECRET")),
        }
        if let Some(ttl) = env_var("JWT_TTL_MINUTES") {
            let minutes = ttl
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue("JWT_TTL_MINUTES", ttl))?;
            builder = builder.jwt_ttl_minutes(minutes);
        }
        if let Some(cost) = env_var("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(port) = env_var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.server_port(port);
        }
        if let Some(url) = env_var("APP_URL") {
            builder = builder.app_url(url);
        }
        if let Some(origin) = env_var("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.jwt_ttl <= chrono::Duration::zero() {
            return Err(ConfigError::InvalidValue(
                "JWT_TTL_MINUTES",
                self.jwt_ttl.num_minutes().to_string(),
            ));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        if !(self.app_url.starts_with("http://") || self.app_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.app_url.clone()));
        }
        Ok(())
    }

    /// Absolute URL for an API path, e.g. `url("/api/posts")`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.app_url, path)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    server_port: Option<u16>,
    app_url: Option<String>,
    cors_origin: Option<String>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_ttl_minutes(mut self, minutes: i64) -> Self {
        self.jwt_ttl_minutes = Some(minutes);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the public base URL; a trailing slash is removed
    pub fn app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            jwt_ttl: chrono::Duration::minutes(
                self.jwt_ttl_minutes.unwrap_or(DEFAULT_JWT_TTL_MINUTES),
            ),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            app_url: self.app_url.unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            cors_origin: self.cors_origin,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
