//! Configuration structs

mod app_config;
mod client_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, RedisConfig, SentimentConfig, ServerConfig, WebhookConfig,
};
pub use client_config::{ClientConfig, HueConfig, MAX_RECENT_WINDOW_MINUTES};
