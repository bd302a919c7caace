//! Text record query service

use chrono::{Duration, Utc};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use textmood_core::DomainError;

use crate::dto::{TextRecordQuery, TextRecordResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default and maximum number of records per listing
pub const DEFAULT_LIST_LIMIT: i64 = 1000;

/// Text record query service
pub struct TextRecordService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TextRecordService<'a> {
    /// Create a new TextRecordService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List records, newest first
    ///
    /// With `since_minutes` only records created within that many minutes
    /// are returned; `limit` caps the result either way.
    #[instrument(skip(self))]
    pub async fn list(&self, query: TextRecordQuery) -> ServiceResult<Vec<TextRecordResponse>> {
        query.validate()?;

        let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let repo = self.ctx.text_record_repo();
        let records = match query.since_minutes {
            Some(minutes) => repo.list_since(Utc::now() - Duration::minutes(minutes), limit).await?,
            None => repo.list_recent(limit).await?,
        };

        Ok(records.into_iter().map(TextRecordResponse::from).collect())
    }

    /// Get one record by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<TextRecordResponse> {
        let record = self
            .ctx
            .text_record_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TextRecordNotFound(id))?;

        Ok(TextRecordResponse::from(record))
    }
}
