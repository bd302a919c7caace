//! Text record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the text_records table
#[derive(Debug, Clone, FromRow)]
pub struct TextRecordModel {
    pub id: Uuid,
    pub text: String,
    pub sentiment_score: f64,
    pub created_at: DateTime<Utc>,
}
