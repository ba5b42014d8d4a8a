/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds everything a request may need:
 * - The optional SQLite connection pool
 * - The immutable application configuration
 *
 * Nothing else survives between requests.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<Option<SqlitePool>>) {
 *     // None when the database is not configured
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Application state shared by every handler
///
/// # Fields
///
/// * `db_pool` - Optional SQLite connection pool
/// * `config` - Secrets, token lifetime, public base URL
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database could not be opened. Handlers answer
    /// 503 in that case.
    pub db_pool: Option<SqlitePool>,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: Option<SqlitePool>, config: AppConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }
}

/// Borrow the pool or fail with 503
pub fn require_pool(pool: Option<SqlitePool>) -> Result<SqlitePool, BackendError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::ServiceUnavailable
    })
}

/// Implement FromRef for Option<SqlitePool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the shared configuration
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
