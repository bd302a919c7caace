//! Client error types

use textmood_cache::SubscriberError;
use thiserror::Error;

/// Errors that stop the client runner
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Live update subscription failed: {0}")]
    Subscriber(#[from] SubscriberError),
}

/// Result type for the client runner
pub type ClientResult<T> = Result<T, ClientError>;
