//! Webhook key extractor
//!
//! When a shared key is configured, the webhook must present it either in
//! the `code` query parameter or the `x-functions-key` header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the webhook key
pub const WEBHOOK_KEY_HEADER: &str = "x-functions-key";
/// Query parameter carrying the webhook key
pub const WEBHOOK_KEY_QUERY: &str = "code";

#[derive(Debug, Deserialize)]
struct KeyQuery {
    code: Option<String>,
}

/// Proof that the request presented the webhook key (or none is required)
#[derive(Debug, Clone, Copy)]
pub struct WebhookKey;

#[async_trait]
impl<S> FromRequestParts<S> for WebhookKey
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.webhook_key() else {
            return Ok(WebhookKey);
        };

        let from_header = parts
            .headers
            .get(WEBHOOK_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        let from_query = Query::<KeyQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.code);

        // Both checked so the timing does not reveal which one matched
        if key_matches(from_header, expected) | key_matches(from_query.as_deref(), expected) {
            Ok(WebhookKey)
        } else {
            tracing::warn!("Webhook request without a valid key");
            Err(ApiError::InvalidWebhookKey)
        }
    }
}

/// Compare without an early exit on the first differing byte
fn key_matches(presented: Option<&str>, expected: &str) -> bool {
    presented.is_some_and(|key| bool::from(key.as_bytes().ct_eq(expected.as_bytes())))
}
