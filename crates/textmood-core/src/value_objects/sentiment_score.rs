//! Sentiment score - detected emotional polarity of a text
//!
//! Scores live in `0.0..=1.0` (0 = negative, 1 = positive). The value `-1.0`
//! is reserved as the "unknown" sentinel used whenever the sentiment API
//! could not score a text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment score in `0.0..=1.0`, or the unknown sentinel
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Sentinel meaning "no score available"
    pub const UNKNOWN: Self = Self(-1.0);

    /// Lowest (most negative) score
    pub const MIN: f64 = 0.0;

    /// Highest (most positive) score
    pub const MAX: f64 = 1.0;

    /// Create a score, normalizing anything outside `0.0..=1.0` to [`Self::UNKNOWN`]
    pub fn new(value: f64) -> Self {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Self(value)
        } else {
            Self::UNKNOWN
        }
    }

    /// Create a score from an optional API result
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::UNKNOWN, Self::new)
    }

    /// Get the raw value (`-1.0` when unknown)
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if this is the unknown sentinel
    #[inline]
    pub fn is_unknown(self) -> bool {
        self.0 < Self::MIN
    }

    /// Get the value if known
    #[inline]
    pub fn known(self) -> Option<f64> {
        if self.is_unknown() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<f64> for SentimentScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SentimentScore> for f64 {
    fn from(score: SentimentScore) -> Self {
        score.0
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(value) => write!(f, "{value:.2}"),
            None => write!(f, "unknown"),
        }
    }
}
