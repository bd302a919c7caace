//! TextRecord entity - one scored inbound text message

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::SentimentScore;

/// TextRecord entity
///
/// Created once by the webhook handler and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: Uuid,
    pub text: String,
    pub sentiment_score: SentimentScore,
    pub created_at: DateTime<Utc>,
}

impl TextRecord {
    /// Create a new record with a fresh id, stamped now
    pub fn new(text: impl Into<String>, sentiment_score: SentimentScore) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sentiment_score,
            created_at: Utc::now(),
        }
    }

    /// Create a record whose sentiment could not be determined
    pub fn unscored(text: impl Into<String>) -> Self {
        Self::new(text, SentimentScore::UNKNOWN)
    }

    /// Check if the record was created within `window` before `now`
    ///
    /// Records stamped after `now` are not considered recent.
    pub fn is_recent(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.created_at <= now && now - self.created_at <= window
    }

    /// Get a truncated preview of the text (for logs)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.text.len() <= max_len {
            &self.text
        } else {
            let mut end = max_len;
            while !self.text.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.text[..end]
        }
    }
}
