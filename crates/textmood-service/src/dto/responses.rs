//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use textmood_core::{sentiment_emoji, SentimentScore, TextRecord};

// ============================================================================
// Text Record Responses
// ============================================================================

/// A stored text record as served to mood clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecordResponse {
    pub id: Uuid,
    pub text: String,
    /// `-1.0` when the sentiment is unknown
    pub sentiment_score: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub emoji: String,
}

impl From<TextRecord> for TextRecordResponse {
    fn from(record: TextRecord) -> Self {
        Self {
            id: record.id,
            emoji: sentiment_emoji(record.sentiment_score).to_string(),
            text: record.text,
            sentiment_score: record.sentiment_score.value(),
            created_at: record.created_at,
        }
    }
}

impl From<TextRecordResponse> for TextRecord {
    fn from(response: TextRecordResponse) -> Self {
        TextRecord {
            id: response.id,
            text: response.text,
            sentiment_score: SentimentScore::new(response.sentiment_score),
            created_at: response.created_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        Self {
            status: if database_healthy && redis_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
