//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use textmood_common::{domain_status_code, AppError};
use textmood_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or port failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_missing_record_is_not_found() {
        let err = ServiceError::from(DomainError::TextRecordNotFound(Uuid::nil()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_TEXT_RECORD");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("limit out of range");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Validation error: limit out of range");
    }

    #[test]
    fn test_parse_error_is_bad_request() {
        let err = ServiceError::from(DomainError::MissingMessageBody);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_MESSAGE_BODY");
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::remote("Hue bridge", "down")).into();
        assert_eq!(app_err.status_code(), 502);

        let app_err: AppError = ServiceError::internal("boom").into();
        assert_eq!(app_err.status_code(), 500);
    }
}
