//! Azure Text Analytics (v2.1) sentiment client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use textmood_common::SentimentConfig;
use textmood_core::{DomainError, SentimentAnalyzer};

use super::http::{http_client, remote_error};

const SERVICE_NAME: &str = "Text Analytics";
const SENTIMENT_PATH: &str = "/text/analytics/v2.1/sentiment";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const DOCUMENT_ID: &str = "1";

#[derive(Debug, Serialize)]
struct SentimentRequest<'a> {
    documents: [SentimentDocument<'a>; 1],
}

#[derive(Debug, Serialize)]
struct SentimentDocument<'a> {
    language: &'a str,
    id: &'a str,
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SentimentResponse {
    #[serde(default)]
    documents: Vec<DocumentScore>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
struct DocumentScore {
    id: String,
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DocumentError {
    id: String,
    message: String,
}

impl SentimentResponse {
    /// Extract the score for our single document
    fn into_score(self) -> Result<Option<f64>, DomainError> {
        if let Some(doc) = self.documents.into_iter().find(|d| d.id == DOCUMENT_ID) {
            return Ok(doc.score);
        }
        match self.errors.into_iter().find(|e| e.id == DOCUMENT_ID) {
            Some(err) => Err(DomainError::remote(SERVICE_NAME, err.message)),
            None => Ok(None),
        }
    }
}

/// Sentiment client for the Text Analytics REST API
#[derive(Debug, Clone)]
pub struct TextAnalyticsClient {
    endpoint: String,
    api_key: String,
    language: String,
    timeout: Duration,
}

impl TextAnalyticsClient {
    /// Create a client for `endpoint` authenticated with `api_key`
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: "en".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a client from service configuration
    pub fn from_config(config: &SentimentConfig) -> Self {
        Self::new(config.endpoint.clone(), config.api_key.clone())
            .with_language(config.language.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an endpoint and key are set
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }

    /// Full URL of the sentiment operation
    pub fn sentiment_url(&self) -> String {
        format!("{}{SENTIMENT_PATH}", self.endpoint)
    }
}

#[async_trait]
impl SentimentAnalyzer for TextAnalyticsClient {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn score(&self, text: &str) -> Result<Option<f64>, DomainError> {
        if !self.is_configured() {
            return Err(DomainError::remote(SERVICE_NAME, "no subscription key configured"));
        }

        let request = SentimentRequest {
            documents: [SentimentDocument {
                language: &self.language,
                id: DOCUMENT_ID,
                text,
            }],
        };

        let response = http_client()
            .post(self.sentiment_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::remote(SERVICE_NAME, format!("status {status}: {body}")));
        }

        let body: SentimentResponse = response
            .json()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;

        let score = body.into_score()?;
        debug!(score = ?score, "Sentiment scored");
        Ok(score)
    }
}
