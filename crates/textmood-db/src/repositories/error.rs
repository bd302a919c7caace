//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use textmood_core::DomainError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Error for inserting a record whose id is already stored
pub fn duplicate_record(id: Uuid) -> DomainError {
    DomainError::ValidationError(format!("Text record {id} already exists"))
}
