//! # textmood-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ClientConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    HueConfig, RateLimitConfig, RedisConfig, SentimentConfig, ServerConfig, WebhookConfig,
    MAX_RECENT_WINDOW_MINUTES,
};
pub use error::{domain_status_code, AppError};
pub use telemetry::{init_tracing, TracingConfig, TracingError};
