//! # textmood-client
//!
//! Mood client for the TextMood service.
//!
//! [`MoodViewModel`] keeps the recent records, their average sentiment and
//! the derived display color, and pushes that color to a light. The
//! [`runner`] drives it headless from periodic refreshes and live
//! announcements.

pub mod error;
pub mod notifications;
pub mod runner;
pub mod source;
pub mod view_model;

pub use error::{ClientError, ClientResult};
pub use notifications::MoodNotification;
pub use runner::run;
pub use source::HttpTextRecordSource;
pub use view_model::{MoodViewModel, BACKGROUND_ALPHA};
