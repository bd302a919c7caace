//! TextRecord entity <-> model mapper

use chrono::{DateTime, Utc};
use uuid::Uuid;

use textmood_core::{SentimentScore, TextRecord};

use crate::models::TextRecordModel;

/// Convert TextRecordModel to TextRecord entity
///
/// Out-of-range scores read back as unknown.
impl From<TextRecordModel> for TextRecord {
    fn from(model: TextRecordModel) -> Self {
        TextRecord {
            id: model.id,
            text: model.text,
            sentiment_score: SentimentScore::new(model.sentiment_score),
            created_at: model.created_at,
        }
    }
}

/// Values bound when inserting a TextRecord
pub struct TextRecordInsert<'a> {
    pub id: Uuid,
    pub text: &'a str,
    pub sentiment_score: f64,
    pub created_at: DateTime<Utc>,
}

impl<'a> TextRecordInsert<'a> {
    pub fn new(record: &'a TextRecord) -> Self {
        Self {
            id: record.id,
            text: &record.text,
            sentiment_score: record.sentiment_score.value(),
            created_at: record.created_at,
        }
    }
}
