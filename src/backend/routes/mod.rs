//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! └── api_routes.rs   - API endpoints (auth, posts, comments)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use board::backend::routes::create_router;
//! use board::backend::server::state::AppState;
//! use board::shared::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("secret").build()?;
//! let router = create_router(AppState::new(None, config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
