//! Database test fixtures and utilities
//!
//! Every `TestApp` owns its own in-memory SQLite database with migrations
//! applied, so tests never share rows.

use axum_test::TestServer;
use board::backend::server::config::in_memory_pool;
use board::backend::server::create_app_with_pool;
use board::shared::AppConfig;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_APP_URL: &str = "http://localhost:8000";

/// Configuration for tests: fast bcrypt and a fixed secret
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .app_url(TEST_APP_URL)
        .build()
        .expect("Failed to build test configuration")
}

/// Test application fixture
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a server around a fresh database
    pub async fn new() -> Self {
        let pool = in_memory_pool()
            .await
            .expect("Failed to create test database pool");
        let app = create_app_with_pool(test_config(), Some(pool.clone()));
        let server = TestServer::new(app).expect("Failed to start test server");
        Self { server, pool }
    }

    /// Server without a database, for 503 paths
    pub fn without_database() -> TestServer {
        let app = create_app_with_pool(test_config(), None);
        TestServer::new(app).expect("Failed to start test server")
    }

    /// Count rows in a table, including soft-deleted ones
    pub async fn count_rows(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
