//! Test utilities shared across the jenkins-auth workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG directory mocking ([`EnvTestGuard`])
//! - Temporary auth files ([`StoreFileGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may not
//! be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod store_file;

// Re-export commonly used items
pub use env::EnvTestGuard;
pub use store_file::{SAMPLE_STORE_YAML, StoreFileGuard};
