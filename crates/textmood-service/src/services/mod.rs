//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate the domain ports.

pub mod context;
pub mod error;
pub mod sms;
pub mod text_record;

#[cfg(test)]
pub(crate) mod mocks;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use sms::{SmsReply, SmsService};
pub use text_record::TextRecordService;
