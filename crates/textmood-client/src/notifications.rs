//! Notifications raised by the view-model

use std::fmt;

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodNotification {
    /// Fetching records failed; the list was left as it was
    Error(String),
    /// The light rejected or never received the new color
    LightConnectionFailed,
}

impl fmt::Display for MoodNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::LightConnectionFailed => f.write_str("Could not connect to the light"),
        }
    }
}
