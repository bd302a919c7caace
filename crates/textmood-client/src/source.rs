//! Record listing over HTTP

use async_trait::async_trait;
use chrono::TimeDelta;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use textmood_core::{DomainError, TextRecord, TextRecordSource, RECENT_WINDOW_MINUTES};
use textmood_service::clients::remote_error;
use textmood_service::{http_client, TextRecordResponse};

const SERVICE_NAME: &str = "TextMood API";

/// Largest page the listing endpoint serves
pub const FETCH_LIMIT: u32 = 1000;

/// Fetches records from the webhook service's listing endpoint
///
/// Only the recency window is requested, so the page limit applies to
/// records that can count towards the mood.
#[derive(Debug, Clone)]
pub struct HttpTextRecordSource {
    base_url: String,
    window_minutes: i64,
    timeout: Duration,
}

impl HttpTextRecordSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            window_minutes: RECENT_WINDOW_MINUTES,
            timeout: Duration::from_secs(10),
        }
    }

    /// Ask only for records inside `window`, rounded up to whole minutes
    #[must_use]
    pub fn with_window(mut self, window: TimeDelta) -> Self {
        let minutes = window.num_minutes();
        let partial = window > TimeDelta::minutes(minutes);
        self.window_minutes = (minutes + i64::from(partial)).max(1);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn records_url(&self) -> String {
        format!(
            "{}/api/v1/text-records?limit={FETCH_LIMIT}&since_minutes={}",
            self.base_url, self.window_minutes
        )
    }
}

#[async_trait]
impl TextRecordSource for HttpTextRecordSource {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<TextRecord>, DomainError> {
        let response = http_client()
            .get(self.records_url())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::remote(SERVICE_NAME, format!("status {status}")));
        }

        let records: Vec<TextRecordResponse> = response
            .json()
            .await
            .map_err(|e| remote_error(SERVICE_NAME, e))?;

        if records.len() >= FETCH_LIMIT as usize {
            warn!(limit = FETCH_LIMIT, "Record page is full; the mood covers the newest only");
        }
        debug!(count = records.len(), "Fetched text records");
        Ok(records.into_iter().map(TextRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use chrono::Utc;
    use textmood_core::SentimentScore;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_records_url() {
        let source = HttpTextRecordSource::new("http://localhost:8080/");
        assert_eq!(
            source.records_url(),
            "http://localhost:8080/api/v1/text-records?limit=1000&since_minutes=60"
        );
    }

    #[test]
    fn test_records_url_uses_window() {
        let source = HttpTextRecordSource::new("http://localhost:8080");
        assert!(source
            .clone()
            .with_window(TimeDelta::hours(2))
            .records_url()
            .ends_with("since_minutes=120"));
        assert!(source
            .with_window(TimeDelta::seconds(90))
            .records_url()
            .ends_with("since_minutes=2"));
    }

    #[tokio::test]
    async fn test_fetch_all_sends_window() {
        #[derive(serde::Deserialize)]
        struct Params {
            limit: u32,
            since_minutes: i64,
        }

        let base = serve(Router::new().route(
            "/api/v1/text-records",
            get(|Query(params): Query<Params>| async move {
                if params.limit == FETCH_LIMIT && params.since_minutes == 180 {
                    (StatusCode::OK, Json(Vec::<TextRecordResponse>::new()))
                } else {
                    (StatusCode::BAD_REQUEST, Json(Vec::new()))
                }
            }),
        ))
        .await;

        let records = HttpTextRecordSource::new(base)
            .with_window(TimeDelta::hours(3))
            .fetch_all()
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_maps_records() {
        let record = TextRecord {
            id: uuid::Uuid::new_v4(),
            text: "sunny".to_string(),
            sentiment_score: SentimentScore::new(0.9),
            created_at: Utc::now(),
        };
        let body = vec![TextRecordResponse::from(record.clone())];
        let base = serve(Router::new().route(
            "/api/v1/text-records",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        ))
        .await;

        let records = HttpTextRecordSource::new(base).fetch_all().await.unwrap();
        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn test_fetch_all_server_error() {
        let base = serve(Router::new().route(
            "/api/v1/text-records",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let err = HttpTextRecordSource::new(base).fetch_all().await.unwrap_err();
        assert!(err.is_remote());
    }

    #[tokio::test]
    async fn test_fetch_all_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpTextRecordSource::new(format!("http://{addr}"))
            .with_timeout(Duration::from_secs(2))
            .fetch_all()
            .await
            .unwrap_err();
        assert!(err.is_remote());
    }
}
