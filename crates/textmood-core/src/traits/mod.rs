//! Traits (ports) implemented by the infrastructure crates

mod gateways;
mod repositories;

pub use gateways::{LightController, SentimentAnalyzer, TextRecordAnnouncer, TextRecordSource};
pub use repositories::{RepoResult, TextRecordRepository};
