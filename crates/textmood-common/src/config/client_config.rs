//! Mood client configuration

use chrono::TimeDelta;
use serde::Deserialize;
use std::env;
use std::net::IpAddr;

use super::app_config::{parse_flag, parse_or, ConfigError};

/// Longest recency window, matching the listing endpoint's `since_minutes` bound
pub const MAX_RECENT_WINDOW_MINUTES: i64 = 10_080;

/// Configuration for the mood client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the webhook service, e.g. `http://127.0.0.1:8080`
    pub api_base_url: String,
    /// Redis URL for live record announcements; live updates are off when `None`
    pub redis_url: Option<String>,
    /// Recency window for the aggregate mood, 1..=MAX_RECENT_WINDOW_MINUTES minutes
    pub recent_window: TimeDelta,
    /// Periodic refresh interval
    pub refresh_interval_secs: u64,
    pub hue: HueConfig,
}

/// Philips Hue bridge settings
#[derive(Debug, Clone, Deserialize)]
pub struct HueConfig {
    pub enabled: bool,
    pub bridge_ip: Option<IpAddr>,
    pub username: String,
    /// Light group to drive; group 0 addresses every light on the bridge
    pub group_id: u32,
    pub timeout_secs: u64,
}

impl HueConfig {
    /// A disabled bridge configuration
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            bridge_ip: None,
            username: String::new(),
            group_id: 0,
            timeout_secs: 5,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = parse_flag(&lookup, "HUE_ENABLED");

        let hue = if enabled {
            let raw_ip = lookup("HUE_BRIDGE_IP").ok_or(ConfigError::MissingVar("HUE_BRIDGE_IP"))?;
            let bridge_ip = raw_ip
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue("HUE_BRIDGE_IP", raw_ip.clone()))?;

            HueConfig {
                enabled,
                bridge_ip: Some(bridge_ip),
                username: lookup("HUE_USERNAME").ok_or(ConfigError::MissingVar("HUE_USERNAME"))?,
                group_id: parse_or(&lookup, "HUE_GROUP_ID", 0),
                timeout_secs: parse_or(&lookup, "HUE_TIMEOUT_SECS", 5),
            }
        } else {
            HueConfig::disabled()
        };

        let window_minutes: i64 = parse_or(&lookup, "RECENT_WINDOW_MINUTES", 60);
        let recent_window = Some(window_minutes)
            .filter(|m| (1..=MAX_RECENT_WINDOW_MINUTES).contains(m))
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| ConfigError::InvalidValue("RECENT_WINDOW_MINUTES", window_minutes.to_string()))?;

        Ok(Self {
            api_base_url: lookup("TEXTMOOD_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://127.0.0.1:8080".to_string()),
            redis_url: lookup("REDIS_URL").filter(|url| !url.trim().is_empty()),
            recent_window,
            refresh_interval_secs: parse_or::<u64, _>(&lookup, "REFRESH_INTERVAL_SECS", 300).max(1),
            hue,
        })
    }
}
