//! Redis Pub/Sub publisher.
//!
//! Publishes text record events for distribution to mood clients.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use textmood_core::{DomainError, DomainEvent, TextRecord, TextRecordAnnouncer, TEXT_RECORD_CREATE};

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::TEXT_RECORDS_CHANNEL;

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "TEXT_RECORD_CREATE")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Wrap a domain event, using its wire event type
    pub fn from_domain(event: &DomainEvent) -> Result<Self, serde_json::Error> {
        let data = match event {
            DomainEvent::TextRecordCreated { record } => serde_json::to_value(record)?,
        };
        Ok(Self::new(event.event_type(), data))
    }

    /// Decode the record carried by a `TEXT_RECORD_CREATE` event
    ///
    /// Returns `None` for other event types or a malformed payload.
    #[must_use]
    pub fn text_record(&self) -> Option<TextRecord> {
        if self.event_type != TEXT_RECORD_CREATE {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish a `TEXT_RECORD_CREATE` event; returns how many subscribers got it
    pub async fn publish_text_record_created(&self, record: &TextRecord) -> RedisResult<u32> {
        let event = PubSubEvent::from_domain(&DomainEvent::text_record_created(record.clone()))?;
        let payload = event.to_json()?;

        let mut conn = self.pool.get().await?;
        let receivers: u32 = conn.publish(TEXT_RECORDS_CHANNEL, &payload).await?;

        tracing::debug!(record_id = %record.id, receivers, "Announced text record");
        Ok(receivers)
    }
}

#[async_trait]
impl TextRecordAnnouncer for Publisher {
    async fn announce_created(&self, record: &TextRecord) -> Result<(), DomainError> {
        self.publish_text_record_created(record)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}
