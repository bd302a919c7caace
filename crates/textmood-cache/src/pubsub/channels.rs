//! Pub/Sub channel names.

/// Channel carrying text record announcements
pub const TEXT_RECORDS_CHANNEL: &str = "text-records";
