//! Webhook service configuration
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub sentiment: SentimentConfig,
    pub webhook: WebhookConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse an environment name, case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Sentiment-analysis API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    /// Base endpoint, e.g. `https://westus.api.cognitive.microsoft.com`
    pub endpoint: String,
    /// Subscription key; scoring is skipped (unknown sentinel) when empty
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_sentiment_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SentimentConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }
}

/// Inbound webhook configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookConfig {
    /// Shared key required on the webhook; open when `None`
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "textmood".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_redis_max_connections() -> u32 {
    8
}

fn default_sentiment_endpoint() -> String {
    "https://westus.api.cognitive.microsoft.com".to_string()
}

fn default_sentiment_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse `key` from `lookup`, falling back to `default` when unset or malformed
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Parse a boolean flag (`1`, `true`, `yes`, `on`)
pub(crate) fn parse_flag<F>(lookup: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).is_some_and(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or_else(|| ConfigError::InvalidValue("APP_ENV", value))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections()),
                min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", default_min_connections()),
            },
            redis: RedisConfig {
                url: lookup("REDIS_URL").ok_or(ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: parse_or(&lookup, "REDIS_MAX_CONNECTIONS", default_redis_max_connections()),
            },
            sentiment: SentimentConfig {
                endpoint: lookup("SENTIMENT_ENDPOINT").unwrap_or_else(default_sentiment_endpoint),
                api_key: lookup("SENTIMENT_API_KEY").unwrap_or_default(),
                timeout_secs: parse_or(&lookup, "SENTIMENT_TIMEOUT_SECS", default_sentiment_timeout()),
                language: lookup("SENTIMENT_LANGUAGE").unwrap_or_else(default_language),
            },
            webhook: WebhookConfig {
                api_key: lookup("WEBHOOK_API_KEY").filter(|key| !key.trim().is_empty()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND", default_requests_per_second()),
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", default_burst()),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
