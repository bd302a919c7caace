//! Gateway traits (ports) for the third-party APIs
//!
//! Each one wraps exactly one external contract: the sentiment-analysis
//! API, the smart-light bridge, the announcement channel, and the record
//! listing consumed by clients.

use async_trait::async_trait;

use crate::entities::TextRecord;
use crate::error::DomainError;
use crate::value_objects::DisplayColor;

/// Scores the sentiment of a text
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Score `text` in `0.0..=1.0`
    ///
    /// `Ok(None)` means the API answered but returned no score for the text.
    async fn score(&self, text: &str) -> Result<Option<f64>, DomainError>;
}

/// Drives a networked light
#[async_trait]
pub trait LightController: Send + Sync {
    /// Set the light to `color`
    async fn set_color(&self, color: DisplayColor) -> Result<(), DomainError>;
}

/// Supplies stored records to a mood client
#[async_trait]
pub trait TextRecordSource: Send + Sync {
    /// Fetch every available record (in any order)
    async fn fetch_all(&self) -> Result<Vec<TextRecord>, DomainError>;
}

/// Announces newly stored records to live clients
#[async_trait]
pub trait TextRecordAnnouncer: Send + Sync {
    /// Announce that `record` was created
    async fn announce_created(&self, record: &TextRecord) -> Result<(), DomainError>;
}
