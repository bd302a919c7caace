//! # textmood-service
//!
//! Application layer: the inbound SMS pipeline, record queries, DTOs, and
//! the HTTP adapters for the sentiment API and the light bridge.

pub mod clients;
pub mod dto;
pub mod services;
pub mod twiml;

pub use clients::{http_client, HueBridgeClient, TextAnalyticsClient};
pub use dto::{
    HealthChecks, HealthResponse, InboundSms, ReadinessResponse, TextRecordQuery,
    TextRecordResponse,
};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SmsReply, SmsService,
    TextRecordService,
};
