//! Integration test utilities for TextMood
//!
//! Helpers for running end-to-end tests against a live webhook service
//! backed by PostgreSQL and Redis.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
