//! Text record handlers
//!
//! Read side consumed by mood clients.

use axum::extract::State;
use textmood_service::{TextRecordQuery, TextRecordResponse, TextRecordService};

use crate::extractors::{RecordIdPath, ValidatedQuery};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List stored records, newest first
///
/// GET /api/v1/text-records?limit=&since_minutes=
pub async fn list_text_records(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TextRecordQuery>,
) -> ApiResult<ApiJson<Vec<TextRecordResponse>>> {
    let records = TextRecordService::new(state.service_context())
        .list(query)
        .await?;

    Ok(ApiJson(records))
}

/// Fetch one record
///
/// GET /api/v1/text-records/:record_id
pub async fn get_text_record(
    State(state): State<AppState>,
    RecordIdPath(record_id): RecordIdPath,
) -> ApiResult<ApiJson<TextRecordResponse>> {
    let record = TextRecordService::new(state.service_context())
        .get(record_id)
        .await?;

    Ok(ApiJson(record))
}
