//! Request DTOs for API endpoints

use serde::Deserialize;
use textmood_core::DomainError;
use validator::Validate;

// ============================================================================
// Webhook Requests
// ============================================================================

/// Inbound message posted by the telephony provider
///
/// Only `Body` is used; the other fields are kept for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundSms {
    #[serde(rename = "Body", default)]
    pub body: Option<String>,

    #[serde(rename = "From", default)]
    pub from: Option<String>,

    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
}

impl InboundSms {
    /// A message carrying only a body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// The message text
    ///
    /// # Errors
    /// `MissingMessageBody` when the body is absent or blank.
    pub fn text(&self) -> Result<&str, DomainError> {
        self.body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
            .ok_or(DomainError::MissingMessageBody)
    }
}

// ============================================================================
// Record Queries
// ============================================================================

/// Query parameters for listing text records
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TextRecordQuery {
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: Option<i64>,

    /// Only records created within this many minutes
    #[validate(range(min = 1, max = 10080, message = "since_minutes must be between 1 and 10080"))]
    pub since_minutes: Option<i64>,
}
