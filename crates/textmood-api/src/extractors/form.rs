//! Webhook form extractor
//!
//! Parses an `application/x-www-form-urlencoded` body, reporting any
//! failure as an invalid payload.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use textmood_core::DomainError;

use crate::response::ApiError;

/// Form body posted by the telephony provider
#[derive(Debug, Clone)]
pub struct WebhookForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for WebhookForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "Rejected webhook body");
            ApiError::Domain(DomainError::InvalidPayload(e.body_text()))
        })?;

        Ok(WebhookForm(value))
    }
}
