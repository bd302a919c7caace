//! # textmood-core
//!
//! Domain layer containing the text record entity, sentiment value objects,
//! the mood arithmetic, domain events, and the ports to storage, the
//! sentiment API, and the light bridge.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod mood;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::TextRecord;
pub use error::DomainError;
pub use events::{DomainEvent, TEXT_RECORD_CREATE};
pub use mood::{
    average_sentiment, recent_records, sentiment_emoji, sort_newest_first, RECENT_WINDOW_MINUTES,
};
pub use traits::{
    LightController, RepoResult, SentimentAnalyzer, TextRecordAnnouncer, TextRecordRepository,
    TextRecordSource,
};
pub use value_objects::{DisplayColor, HueLightState, Rgb8, SentimentScore};
