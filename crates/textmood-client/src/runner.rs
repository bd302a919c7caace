//! Headless client loop
//!
//! One refresh at start-up, then periodic refreshes, live appends from the
//! `text-records` channel and notification logging until Ctrl-C.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, info, warn};

use textmood_cache::{Announcement, Subscriber};
use textmood_common::ClientConfig;
use textmood_service::HueBridgeClient;

use crate::error::ClientResult;
use crate::notifications::MoodNotification;
use crate::source::HttpTextRecordSource;
use crate::view_model::MoodViewModel;

/// Build the view-model described by `config`
pub fn build_view_model(config: &ClientConfig) -> MoodViewModel {
    let source = HttpTextRecordSource::new(&config.api_base_url).with_window(config.recent_window);
    let view_model = MoodViewModel::new(Arc::new(source)).with_window(config.recent_window);

    match HueBridgeClient::from_config(&config.hue) {
        Some(light) => {
            info!(url = %light.group_action_url(), "Light bridge configured");
            view_model.with_light(Arc::new(light))
        }
        None => view_model,
    }
}

/// Run the client until Ctrl-C
pub async fn run(config: ClientConfig) -> ClientResult<()> {
    let mut view_model = build_view_model(&config);

    let subscriber = match &config.redis_url {
        Some(url) => Some(Subscriber::connect(url)?),
        None => {
            info!("REDIS_URL not set; live updates disabled");
            None
        }
    };
    let announcements = subscriber.as_ref().map(Subscriber::receiver);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    };

    drive(
        &mut view_model,
        Duration::from_secs(config.refresh_interval_secs),
        announcements,
        shutdown,
    )
    .await;

    if let Some(subscriber) = subscriber {
        if let Err(e) = subscriber.shutdown() {
            warn!(error = %e, "Subscriber did not shut down cleanly");
        }
    }

    info!("Client stopped");
    Ok(())
}

/// Serve refreshes, live updates and notifications until `shutdown` resolves
///
/// The first refresh happens immediately.
pub async fn drive(
    view_model: &mut MoodViewModel,
    refresh_every: Duration,
    mut announcements: Option<broadcast::Receiver<Announcement>>,
    shutdown: impl Future<Output = ()>,
) {
    let mut notifications = view_model.subscribe();
    let mut ticker = tokio::time::interval(refresh_every);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => view_model.refresh().await,
            received = next_announcement(&mut announcements) => {
                if !apply_announcement(view_model, received).await {
                    announcements = None;
                }
            }
            Ok(notification) = notifications.recv() => log_notification(&notification),
            () = &mut shutdown => break,
        }
    }
}

/// Apply one live update; `false` once the stream has closed
async fn apply_announcement(
    view_model: &mut MoodViewModel,
    received: Result<Announcement, RecvError>,
) -> bool {
    match received {
        Ok(announcement) => {
            match announcement.text_record() {
                Some(record) => {
                    view_model.append(record).await;
                }
                None => debug!(payload = %announcement.payload, "Ignoring announcement"),
            }
            true
        }
        Err(RecvError::Lagged(skipped)) => {
            warn!(skipped, "Missed live updates; refreshing");
            view_model.refresh().await;
            true
        }
        Err(RecvError::Closed) => {
            warn!("Live update stream closed");
            false
        }
    }
}

/// Next announcement, or never when live updates are off
async fn next_announcement(
    announcements: &mut Option<broadcast::Receiver<Announcement>>,
) -> Result<Announcement, RecvError> {
    match announcements {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

fn log_notification(notification: &MoodNotification) {
    match notification {
        MoodNotification::Error(_) => error!(%notification, "Refresh failed"),
        MoodNotification::LightConnectionFailed => warn!(%notification, "Light unreachable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeDelta;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use textmood_cache::PubSubEvent;
    use textmood_common::HueConfig;
    use textmood_core::{DomainError, DomainEvent, SentimentScore, TextRecord, TextRecordSource};

    fn config(hue: HueConfig) -> ClientConfig {
        ClientConfig {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            redis_url: None,
            recent_window: TimeDelta::minutes(60),
            refresh_interval_secs: 300,
            hue,
        }
    }

    /// Serves a fixed list and counts fetches
    #[derive(Default)]
    struct CountingSource {
        records: Vec<TextRecord>,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl TextRecordSource for CountingSource {
        async fn fetch_all(&self) -> Result<Vec<TextRecord>, DomainError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    fn announcement(record: &TextRecord) -> Announcement {
        let event = PubSubEvent::from_domain(&DomainEvent::text_record_created(record.clone())).unwrap();
        Announcement::parse(event.to_json().unwrap())
    }

    async fn stop_after(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[test]
    fn test_view_model_without_light() {
        let view_model = build_view_model(&config(HueConfig::disabled()));
        assert!(!view_model.has_light());
    }

    #[test]
    fn test_view_model_with_light() {
        let hue = HueConfig {
            enabled: true,
            bridge_ip: Some("192.168.1.20".parse().unwrap()),
            username: "user".to_string(),
            group_id: 1,
            timeout_secs: 5,
        };
        let view_model = build_view_model(&config(hue));
        assert!(view_model.has_light());
    }

    #[tokio::test]
    async fn test_lag_triggers_refresh() {
        let missed = TextRecord::new("missed", SentimentScore::new(0.7));
        let source = Arc::new(CountingSource {
            records: vec![missed.clone()],
            ..CountingSource::default()
        });
        let mut view_model = MoodViewModel::new(source.clone());

        let keep = apply_announcement(&mut view_model, Err(RecvError::Lagged(3))).await;

        assert!(keep);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(view_model.records(), &[missed]);
    }

    #[tokio::test]
    async fn test_record_announcement_appends() {
        let source = Arc::new(CountingSource::default());
        let mut view_model = MoodViewModel::new(source.clone());
        let record = TextRecord::new("live", SentimentScore::new(0.9));

        assert!(apply_announcement(&mut view_model, Ok(announcement(&record))).await);
        assert!(apply_announcement(&mut view_model, Ok(Announcement::parse("noise".to_string()))).await);

        assert_eq!(view_model.records(), &[record]);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_closed_stream_turns_live_updates_off() {
        let mut view_model = MoodViewModel::new(Arc::new(CountingSource::default()));
        assert!(!apply_announcement(&mut view_model, Err(RecvError::Closed)).await);
    }

    #[tokio::test]
    async fn test_drive_refreshes_on_lag() {
        let record = TextRecord::new("latest", SentimentScore::new(0.8));
        let source = Arc::new(CountingSource {
            records: vec![record.clone()],
            ..CountingSource::default()
        });
        let mut view_model = MoodViewModel::new(source.clone());

        // Capacity 1: the receiver lags, then sees the newest message
        let (tx, rx) = broadcast::channel(1);
        tx.send(Announcement::parse("older".to_string())).unwrap();
        tx.send(announcement(&record)).unwrap();

        drive(&mut view_model, Duration::from_secs(3600), Some(rx), stop_after(100)).await;

        // Start-up refresh plus the lag refresh
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(view_model.records(), &[record]);
    }

    #[tokio::test]
    async fn test_drive_survives_closed_stream() {
        let source = Arc::new(CountingSource::default());
        let mut view_model = MoodViewModel::new(source.clone());

        let (tx, rx) = broadcast::channel::<Announcement>(4);
        drop(tx);

        drive(&mut view_model, Duration::from_secs(3600), Some(rx), stop_after(50)).await;

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert!(!view_model.is_refreshing());
    }

    #[tokio::test]
    async fn test_drive_without_live_updates() {
        let source = Arc::new(CountingSource::default());
        let mut view_model = MoodViewModel::new(source.clone());

        drive(&mut view_model, Duration::from_secs(3600), None, stop_after(50)).await;

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
