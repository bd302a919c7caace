//! Live text record announcements.
//!
//! A background task keeps one Pub/Sub connection subscribed to
//! `text-records` and forwards every message into a broadcast channel.
//! A dropped connection is re-established after [`RECONNECT_DELAY`].

use futures_util::StreamExt;
use redis::Client;
use std::time::Duration;
use textmood_core::TextRecord;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, trace, warn};

use crate::pool::redact_url;
use crate::pubsub::{PubSubEvent, TEXT_RECORDS_CHANNEL};

/// Announcements buffered per receiver before it lags
pub const ANNOUNCEMENT_BUFFER: usize = 256;

/// Pause between a lost connection and the next attempt
pub const RECONNECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Subscriber already stopped")]
    Stopped,
}

pub type SubscriberResult<T> = Result<T, SubscriberError>;

/// One message seen on the announcement channel
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Parsed event, `None` when the payload is not an event envelope
    pub event: Option<PubSubEvent>,
    pub payload: String,
}

impl Announcement {
    #[must_use]
    pub fn parse(payload: String) -> Self {
        Self {
            event: serde_json::from_str(&payload).ok(),
            payload,
        }
    }

    /// The record announced by this message, if it is a record announcement
    #[must_use]
    pub fn text_record(&self) -> Option<TextRecord> {
        self.event.as_ref().and_then(PubSubEvent::text_record)
    }
}

/// Handle on the background listener
///
/// Dropping the handle stops the listener as well.
pub struct Subscriber {
    announcements: broadcast::Sender<Announcement>,
    stop: watch::Sender<bool>,
}

impl Subscriber {
    /// Parse `redis_url` and start listening on `text-records`
    ///
    /// The connection itself is made in the background, so an unreachable
    /// server shows up in the logs rather than here.
    pub fn connect(redis_url: &str) -> SubscriberResult<Self> {
        let client = Client::open(redis_url)?;
        let (announcements, _) = broadcast::channel(ANNOUNCEMENT_BUFFER);
        let (stop, stopped) = watch::channel(false);

        tokio::spawn(listen(
            client,
            redact_url(redis_url).to_string(),
            announcements.clone(),
            stopped,
        ));

        Ok(Self { announcements, stop })
    }

    #[must_use]
    pub fn receiver(&self) -> broadcast::Receiver<Announcement> {
        self.announcements.subscribe()
    }

    pub fn shutdown(&self) -> SubscriberResult<()> {
        self.stop.send(true).map_err(|_| SubscriberError::Stopped)
    }
}

async fn listen(
    client: Client,
    url: String,
    announcements: broadcast::Sender<Announcement>,
    mut stopped: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            result = forward(&client, &url, &announcements) => match result {
                Ok(()) => warn!("Announcement stream ended"),
                Err(e) => error!(error = %e, "Announcement subscription failed"),
            },
            // A send or a dropped handle both mean stop
            _ = stopped.changed() => break,
        }

        tokio::select! {
            () = tokio::time::sleep(RECONNECT_DELAY) => debug!("Reconnecting to Redis"),
            _ = stopped.changed() => break,
        }
    }

    info!("Subscriber stopped");
}

/// Forward messages until the connection drops
async fn forward(
    client: &Client,
    url: &str,
    announcements: &broadcast::Sender<Announcement>,
) -> redis::RedisResult<()> {
    let mut pubsub = client.get_async_pubsub().await?;
    pubsub.subscribe(TEXT_RECORDS_CHANNEL).await?;
    info!(url, channel = TEXT_RECORDS_CHANNEL, "Listening for announcements");

    let mut stream = pubsub.on_message();
    while let Some(msg) = stream.next().await {
        let payload: String = msg.get_payload().unwrap_or_default();
        trace!(bytes = payload.len(), "Received announcement");
        // No receivers is fine
        let _ = announcements.send(Announcement::parse(payload));
    }

    Ok(())
}
