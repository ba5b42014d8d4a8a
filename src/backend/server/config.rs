/**
 * Server Configuration
 *
 * This module opens the SQLite connection pool and applies the schema
 * migrations from `migrations/`.
 *
 * # Error Handling
 *
 * A database that cannot be opened is logged but does not prevent server
 * startup. The pool is then `None` and every data route answers 503.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

const MAX_CONNECTIONS: u32 = 5;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Parses `config.database_url`
/// 2. Creates a SQLite connection pool (creating the file if missing)
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(SqlitePool)` if database is successfully configured
/// - `None` if the URL is invalid, the connection fails or migrations fail
pub async fn load_database(config: &AppConfig) -> DatabaseConfig {
    tracing::info!("Connecting to database...");

    let options = match SqliteConnectOptions::from_str(&config.database_url) {
        Ok(options) => options.create_if_missing(true).foreign_keys(true),
        Err(e) => {
            tracing::error!("Invalid DATABASE_URL {:?}: {}", config.database_url, e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    let pool = match SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Database features will be disabled.");
        return None;
    }

    Some(pool)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Fresh in-memory database with the schema applied
///
/// The pool holds exactly one connection that never expires; each SQLite
/// `:memory:` connection is its own database.
pub async fn in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    in_memory_pool().await.expect("in-memory database")
}
