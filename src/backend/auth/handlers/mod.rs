//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── exists.rs   - Nickname / email availability checks
//! ├── login.rs    - User authentication handler
//! └── logout.rs   - Token revocation handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`check_nickname`** - GET /api/auth/nickname/{nickname}/exists
//! - **`check_email`** - GET /api/auth/email/{email}/exists
//! - **`login`** - POST /api/auth/login
//! - **`logout`** - POST /api/auth/logout (requires authentication)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Availability checks
pub mod exists;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use exists::{check_email, check_nickname};
pub use login::login;
pub use logout::logout;
pub use register::register;
