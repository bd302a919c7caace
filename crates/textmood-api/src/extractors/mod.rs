//! Axum extractors for request handling
//!
//! Custom extractors for webhook authentication, form and query parsing.

mod form;
mod path;
mod validated;
mod webhook_key;

pub use form::WebhookForm;
pub use path::RecordIdPath;
pub use validated::ValidatedQuery;
pub use webhook_key::{WebhookKey, WEBHOOK_KEY_HEADER, WEBHOOK_KEY_QUERY};
