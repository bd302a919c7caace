//! Redis Pub/Sub module.
//!
//! Announces new text records so that mood clients can append them live.

mod channels;
mod publisher;
mod subscriber;

pub use channels::TEXT_RECORDS_CHANNEL;
pub use publisher::{PubSubEvent, Publisher};
pub use subscriber::{
    Announcement, Subscriber, SubscriberError, SubscriberResult, ANNOUNCEMENT_BUFFER,
    RECONNECT_DELAY,
};
