//! Test helpers for integration tests
//!
//! Spawns the real application on a local port and talks to it over HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use textmood_api::{create_app, create_app_state};
use textmood_common::AppConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::SmsForm;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Post an inbound SMS to the webhook
    pub async fn post_sms(&self, path: &str, sms: &SmsForm) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(&sms.fields()).send().await?)
    }
}

/// Configuration from the environment, with sentiment scoring switched off
/// and no webhook key
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.sentiment.api_key = String::new();
    config.webhook.api_key = None;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "REDIS_URL", "API_PORT"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status and return the body text
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}
