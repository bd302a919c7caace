//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, assert_text, check_test_env, test_config, SmsForm, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;
use textmood_cache::{Subscriber, TEXT_RECORD_CREATE};
use textmood_client::{HttpTextRecordSource, MoodViewModel};
use textmood_service::TextRecordResponse;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["checks"]["database"], "healthy");
    assert_eq!(body["checks"]["redis"], "healthy");
}

// ============================================================================
// Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_sms_is_stored_and_listed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let sms = SmsForm::unique();

    let response = server.post_sms("/api/sms", &sms).await.unwrap();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/xml"
    );
    let twiml = assert_text(response, StatusCode::OK).await.unwrap();
    // Scoring is off, so the mood is unknown
    assert!(twiml.contains("<Message>Text Sentiment: 🤷</Message>"));

    let response = server.get("/api/v1/text-records?limit=50").await.unwrap();
    let records: Vec<TextRecordResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let stored = records
        .iter()
        .find(|r| r.text == sms.text())
        .expect("posted message is listed");
    assert_eq!(stored.emoji, "🤷");

    let response = server
        .get(&format!("/api/v1/text-records/{}", stored.id))
        .await
        .unwrap();
    let fetched: TextRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, stored.id);
}

#[tokio::test]
async fn test_sms_without_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_sms("/api/sms", &SmsForm::without_body()).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body["error"]["code"], "MISSING_MESSAGE_BODY");
}

#[tokio::test]
async fn test_sms_with_webhook_key() {
    if !check_test_env().await {
        return;
    }

    let mut config = test_config().unwrap();
    config.webhook.api_key = Some("integration-key".to_string());
    let server = TestServer::start_with_config(config).await.expect("Failed to start server");

    let response = server.post_sms("/api/sms", &SmsForm::unique()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_sms("/api/sms?code=integration-key", &SmsForm::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_sms_is_announced() {
    if !check_test_env().await {
        return;
    }

    let config = test_config().unwrap();
    let subscriber = Subscriber::connect(&config.redis.url).unwrap();
    let mut rx = subscriber.receiver();
    // Give the listener time to subscribe
    tokio::time::sleep(Duration::from_millis(300)).await;

    let server = TestServer::start_with_config(config).await.expect("Failed to start server");
    let sms = SmsForm::unique();
    let response = server.post_sms("/api/sms", &sms).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let record = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let message = rx.recv().await.unwrap();
            let is_create = message
                .event
                .as_ref()
                .is_some_and(|e| e.event_type == TEXT_RECORD_CREATE);
            if let Some(record) = message.text_record().filter(|r| is_create && r.text == sms.text()) {
                return record;
            }
        }
    })
    .await
    .expect("announcement received");

    assert!(record.sentiment_score.is_unknown());
    subscriber.shutdown().ok();
}

// ============================================================================
// Mood Client Tests
// ============================================================================

#[tokio::test]
async fn test_view_model_sees_new_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let sms = SmsForm::unique();
    let response = server.post_sms("/api/sms", &sms).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let source = Arc::new(HttpTextRecordSource::new(server.base_url()));
    let mut view_model = MoodViewModel::new(source);
    let mut notifications = view_model.subscribe();
    view_model.refresh().await;

    assert!(notifications.try_recv().is_err());
    assert!(view_model.records().iter().any(|r| r.text == sms.text()));
}
