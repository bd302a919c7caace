//! HTTP adapters for the third-party APIs
//!
//! All adapters share one lazily built `reqwest::Client`.

mod http;
mod hue_bridge;
mod text_analytics;

pub use http::{http_client, remote_error, USER_AGENT};
pub use hue_bridge::HueBridgeClient;
pub use text_analytics::TextAnalyticsClient;
