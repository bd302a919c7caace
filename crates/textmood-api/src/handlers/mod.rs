//! HTTP request handlers
//!
//! Handler functions for all API endpoints.

pub mod health;
pub mod sms;
pub mod text_records;
