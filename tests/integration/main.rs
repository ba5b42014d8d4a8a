//! Integration tests
//!
//! Drive the full router over HTTP with `axum-test`, each test against its
//! own in-memory database.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;

mod api;
