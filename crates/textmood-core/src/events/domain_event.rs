//! Domain events - events emitted when domain state changes
//!
//! Published on the announcement channel so that mood clients can append
//! new records without a full refresh.

use serde::{Deserialize, Serialize};

use crate::entities::TextRecord;

/// Wire name of [`DomainEvent::TextRecordCreated`]
pub const TEXT_RECORD_CREATE: &str = "TEXT_RECORD_CREATE";

/// All possible domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    #[serde(rename = "TEXT_RECORD_CREATE")]
    TextRecordCreated { record: TextRecord },
}

impl DomainEvent {
    /// Get the event type name used on the wire
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TextRecordCreated { .. } => TEXT_RECORD_CREATE,
        }
    }

    pub fn text_record_created(record: TextRecord) -> Self {
        Self::TextRecordCreated { record }
    }
}
