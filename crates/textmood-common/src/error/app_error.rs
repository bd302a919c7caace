//! Application error types
//!
//! `AppError` covers start-up and infrastructure failures. Request-level
//! failures travel as `DomainError` and are mapped to HTTP statuses by
//! [`domain_status_code`].

use textmood_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    /// Bad settings, or the listener could not be bound
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Cache(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status_code(e),
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() {
        400
    } else if err.is_remote() {
        502
    } else {
        500
    }
}
