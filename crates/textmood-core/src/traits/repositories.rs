//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::TextRecord;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// TextRecord Repository
// ============================================================================

#[async_trait]
pub trait TextRecordRepository: Send + Sync {
    /// Store a new record
    async fn create(&self, record: &TextRecord) -> RepoResult<()>;

    /// Find a record by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<TextRecord>>;

    /// List the newest records, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TextRecord>>;

    /// List records created at or after `since`, newest first, at most `limit`
    async fn list_since(&self, since: DateTime<Utc>, limit: i64) -> RepoResult<Vec<TextRecord>>;
}
