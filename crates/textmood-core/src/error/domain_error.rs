//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Parse Errors (malformed inbound payload)
    // =========================================================================
    #[error("Inbound message has no body")]
    MissingMessageBody,

    #[error("Invalid inbound payload: {0}")]
    InvalidPayload(String),

    // =========================================================================
    // Remote Call Errors (third-party API unreachable or erroring)
    // =========================================================================
    #[error("{service} call failed: {message}")]
    RemoteCall {
        service: &'static str,
        message: String,
    },

    // =========================================================================
    // Not Found / Validation
    // =========================================================================
    #[error("Text record not found: {0}")]
    TextRecordNotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a remote call error for the named service
    pub fn remote(service: &'static str, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            service,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingMessageBody => "MISSING_MESSAGE_BODY",
            Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::RemoteCall { .. } => "REMOTE_CALL_FAILED",
            Self::TextRecordNotFound(_) => "UNKNOWN_TEXT_RECORD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if the inbound payload could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::MissingMessageBody | Self::InvalidPayload(_))
    }

    /// Check if a third-party call failed
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteCall { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TextRecordNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_)) || self.is_parse()
    }
}
