//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Form fields of an inbound SMS as the telephony provider posts them
#[derive(Debug, Clone)]
pub struct SmsForm {
    pub body: Option<String>,
    pub from: String,
    pub message_sid: String,
}

impl SmsForm {
    /// A message with a body no other test will send
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            body: Some(format!("integration message {suffix}")),
            from: "+15550001111".to_string(),
            message_sid: format!("SM{suffix}"),
        }
    }

    /// A message with no `Body` field
    pub fn without_body() -> Self {
        Self {
            body: None,
            ..Self::unique()
        }
    }

    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Fields in posting order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("From", self.from.clone()),
            ("MessageSid", self.message_sid.clone()),
        ];
        if let Some(body) = &self.body {
            fields.push(("Body", body.clone()));
        }
        fields
    }
}
