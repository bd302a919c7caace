//! Route definitions
//!
//! The webhook lives at `/api/sms`; the read side is mounted under `/api/v1`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, sms, text_records};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/sms", post(sms::receive_sms))
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/text-records", get(text_records::list_text_records))
        .route("/text-records/:record_id", get(text_records::get_text_record))
}
