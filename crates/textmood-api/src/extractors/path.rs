//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// Text record id from the path (`/text-records/:record_id`)
#[derive(Debug, Clone, Copy)]
pub struct RecordIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse::<Uuid>()
            .map(RecordIdPath)
            .map_err(|_| ApiError::invalid_path(format!("'{raw}' is not a valid record id")))
    }
}
