//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An application backed by a fresh in-memory database
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
