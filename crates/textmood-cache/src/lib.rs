//! # textmood-cache
//!
//! Redis layer announcing new text records to live mood clients.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: `TEXT_RECORD_CREATE` events on the `text-records` channel
//!
//! ## Example
//!
//! ```ignore
//! use textmood_cache::{Publisher, RedisPool, Subscriber};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! Publisher::new(pool).publish_text_record_created(&record).await?;
//!
//! let subscriber = Subscriber::connect(&config.redis.url)?;
//! let mut rx = subscriber.receiver();
//! ```

pub mod pool;
pub mod pubsub;

pub use pool::{RedisPool, RedisPoolError, RedisResult, SharedRedisPool};
pub use pubsub::{
    Announcement, PubSubEvent, Publisher, Subscriber, SubscriberError, SubscriberResult,
    ANNOUNCEMENT_BUFFER, RECONNECT_DELAY, TEXT_RECORDS_CHANNEL,
};
pub use textmood_core::TEXT_RECORD_CREATE;
