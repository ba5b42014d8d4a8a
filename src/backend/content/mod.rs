//! Content Module
//!
//! Pieces shared by posts and comments: the soft-delete lifecycle, the
//! embedded author view, and the ownership and visibility policy that every
//! lookup and mutation goes through.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs        - Module exports and documentation
//! ├── lifecycle.rs  - RecordState (Live / Deleted)
//! ├── author.rs     - Author embedded in responses
//! └── policy.rs     - Resource trait, lookup keys, Access / Lookup outcomes
//! ```

/// Soft-delete state
pub mod lifecycle;

/// Embedded author view
pub mod author;

/// Ownership and visibility policy
pub mod policy;

pub use author::Author;
pub use lifecycle::RecordState;
pub use policy::{Access, CommentKey, Lookup, PostKey, Resource};
