//! Authentication Module
//!
//! This module handles user registration, login and logout. It provides HTTP
//! handlers for authentication endpoints and manages user data, JWT tokens
//! and token revocation.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`revocation`** - Tokens revoked at logout
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── revocation.rs   - Logout blacklist
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: nickname, email, password → user created (no token)
//! 2. **Login**: email and password → credentials verified → JWT token returned
//! 3. **Authenticated requests**: `Authorization: Bearer <token>`, checked by
//!    the `AuthUser` extractor
//! 4. **Logout**: the token's `jti` is revoked until it expires
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens expire after `JWT_TTL_MINUTES`
//! - Unknown email and wrong password produce the same response

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Revoked tokens
pub mod revocation;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{check_email, check_nickname, login, logout, register};
pub use handlers::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
