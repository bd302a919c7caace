//! Mood aggregation view-model
//!
//! Owns the list of recent records (newest first) and everything derived
//! from it. Notifications go out on a broadcast channel.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use textmood_core::{
    average_sentiment, recent_records, sort_newest_first, DisplayColor, LightController,
    SentimentScore, TextRecord, TextRecordSource, RECENT_WINDOW_MINUTES,
};

use crate::notifications::MoodNotification;

/// Alpha applied to the background color
pub const BACKGROUND_ALPHA: f64 = 0.5;

const NOTIFICATION_BUFFER: usize = 64;

/// View-model behind the mood display
pub struct MoodViewModel {
    source: Arc<dyn TextRecordSource>,
    light: Option<Arc<dyn LightController>>,
    window: Duration,
    records: Vec<TextRecord>,
    average: SentimentScore,
    background_color: DisplayColor,
    is_refreshing: bool,
    notifications: broadcast::Sender<MoodNotification>,
}

impl MoodViewModel {
    /// Empty view-model with no light attached
    pub fn new(source: Arc<dyn TextRecordSource>) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);
        Self {
            source,
            light: None,
            window: Duration::minutes(RECENT_WINDOW_MINUTES),
            records: Vec::new(),
            average: SentimentScore::UNKNOWN,
            background_color: DisplayColor::from_score(SentimentScore::UNKNOWN),
            is_refreshing: false,
            notifications,
        }
    }

    #[must_use]
    pub fn with_light(mut self, light: Arc<dyn LightController>) -> Self {
        self.light = Some(light);
        self
    }

    /// Recency window applied on refresh
    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Records, newest first
    pub fn records(&self) -> &[TextRecord] {
        &self.records
    }

    pub fn average(&self) -> SentimentScore {
        self.average
    }

    pub fn background_color(&self) -> DisplayColor {
        self.background_color
    }

    /// Background as CSS, with [`BACKGROUND_ALPHA`]
    pub fn background_css(&self) -> String {
        self.background_color.to_css_rgba(BACKGROUND_ALPHA)
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn has_light(&self) -> bool {
        self.light.is_some()
    }

    /// Receive notifications raised from now on
    pub fn subscribe(&self) -> broadcast::Receiver<MoodNotification> {
        self.notifications.subscribe()
    }

    /// Reload the recent records and update the mood
    ///
    /// On a fetch failure the previous list is kept and an error
    /// notification is raised; the mood is recomputed either way.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) {
        self.is_refreshing = true;

        match self.source.fetch_all().await {
            Ok(all) => {
                let mut recent = recent_records(&all, self.window, Utc::now());
                sort_newest_first(&mut recent);
                debug!(fetched = all.len(), recent = recent.len(), "Records refreshed");
                self.records = recent;
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch text records");
                self.notify(MoodNotification::Error(e.to_string()));
            }
        }

        self.recompute();
        self.push_light().await;

        self.is_refreshing = false;
    }

    /// Add a newly announced record
    ///
    /// Returns `false` (and does nothing else) when a record with the same
    /// id is already listed.
    #[instrument(skip(self, record), fields(record_id = %record.id))]
    pub async fn append(&mut self, record: TextRecord) -> bool {
        if self.records.iter().any(|r| r.id == record.id) {
            debug!("Record already listed");
            return false;
        }

        self.records.insert(0, record);
        self.recompute();
        self.push_light().await;
        true
    }

    fn recompute(&mut self) {
        self.average = average_sentiment(&self.records);
        self.background_color = DisplayColor::from_score(self.average);
        info!(
            records = self.records.len(),
            average = self.average.value(),
            color = %self.background_color.to_hex(),
            "Mood updated"
        );
    }

    async fn push_light(&self) {
        let Some(light) = &self.light else {
            return;
        };

        if let Err(e) = light.set_color(self.background_color).await {
            warn!(error = %e, "Failed to update light");
            self.notify(MoodNotification::LightConnectionFailed);
        }
    }

    fn notify(&self, notification: MoodNotification) {
        // No receivers is fine
        let _ = self.notifications.send(notification);
    }
}

impl std::fmt::Debug for MoodViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodViewModel")
            .field("records", &self.records.len())
            .field("average", &self.average)
            .field("background_color", &self.background_color)
            .field("is_refreshing", &self.is_refreshing)
            .field("light", &self.light.is_some())
            .finish()
    }
}
