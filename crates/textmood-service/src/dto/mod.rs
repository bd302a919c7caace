//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{InboundSms, TextRecordQuery};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, TextRecordResponse};
