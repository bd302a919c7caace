//! Philips Hue bridge client
//!
//! Drives one light group through the bridge's local REST API.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, instrument};

use textmood_common::HueConfig;
use textmood_core::{DisplayColor, DomainError, HueLightState, LightController};

use super::http::{http_client, remote_error};

const SERVICE_NAME: &str = "Hue bridge";

/// Hue bridge light controller
#[derive(Debug, Clone)]
pub struct HueBridgeClient {
    base_url: String,
    username: String,
    group_id: u32,
    timeout: Duration,
}

impl HueBridgeClient {
    /// Create a client for the bridge at `bridge_ip`
    pub fn new(bridge_ip: IpAddr, username: impl Into<String>, group_id: u32) -> Self {
        let host = match bridge_ip {
            IpAddr::V4(ip) => ip.to_string(),
            IpAddr::V6(ip) => format!("[{ip}]"),
        };
        Self {
            base_url: format!("http://{host}"),
            username: username.into(),
            group_id,
            timeout: Duration::from_secs(5),
        }
    }

    /// Create a client from configuration; `None` when the bridge is disabled
    pub fn from_config(config: &HueConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let ip = config.bridge_ip?;
        Some(
            Self::new(ip, config.username.clone(), config.group_id)
                .with_timeout(Duration::from_secs(config.timeout_secs)),
        )
    }

    /// Point the client at a different base URL (e.g. a proxy)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the group action resource
    pub fn group_action_url(&self) -> String {
        format!("{}/api/{}/groups/{}/action", self.base_url, self.username, self.group_id)
    }

    /// Apply a light state to the group
    #[instrument(skip(self), fields(group_id = self.group_id))]
    pub async fn set_state(&self, state: HueLightState) -> Result<(), DomainError> {
        let response = http_client()
            .put(self.group_action_url())
            .timeout(self.timeout)
            .json(&state)
            .send()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::remote(SERVICE_NAME, format!("status {status}")));
        }

        let reply: serde_json::Value = response
            .json()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;
        check_bridge_reply(&reply)?;

        debug!(hue = state.hue, sat = state.sat, bri = state.bri, "Light group updated");
        Ok(())
    }
}

/// The bridge answers 200 even on failure; errors are entries carrying an `error` object
fn check_bridge_reply(reply: &serde_json::Value) -> Result<(), DomainError> {
    let entries = match reply {
        serde_json::Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };

    for entry in entries {
        if let Some(error) = entry.get("error") {
            let description = error
                .get("description")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown bridge error");
            return Err(DomainError::remote(SERVICE_NAME, description));
        }
    }

    Ok(())
}

#[async_trait]
impl LightController for HueBridgeClient {
    async fn set_color(&self, color: DisplayColor) -> Result<(), DomainError> {
        self.set_state(HueLightState::from_color(color)).await
    }
}
