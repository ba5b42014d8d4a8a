/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and apply migrations
 * 2. Build `AppState` from the pool and configuration
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// A database that cannot be opened is logged and the server starts
/// without it; data routes then answer 503.
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing board backend server");

    let db_pool = load_database(&config).await;
    let app = create_app_with_pool(config, db_pool);

    tracing::info!("Router configured");

    app
}

/// Build the router around an existing pool
///
/// Used by tests with an in-memory database.
pub fn create_app_with_pool(config: AppConfig, db_pool: Option<SqlitePool>) -> Router<()> {
    create_router(AppState::new(db_pool, config))
}
