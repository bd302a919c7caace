//! PostgreSQL implementation of TextRecordRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use textmood_core::{RepoResult, TextRecord, TextRecordRepository};

use crate::mappers::TextRecordInsert;
use crate::models::TextRecordModel;

use super::error::{duplicate_record, map_db_error, map_unique_violation};

/// Upper bound on rows returned by one listing
const MAX_LIST_LIMIT: i64 = 1000;

/// PostgreSQL implementation of TextRecordRepository
#[derive(Clone)]
pub struct PgTextRecordRepository {
    pool: PgPool,
}

impl PgTextRecordRepository {
    /// Create a new PgTextRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TextRecordRepository for PgTextRecordRepository {
    #[instrument(skip(self, record), fields(record_id = %record.id))]
    async fn create(&self, record: &TextRecord) -> RepoResult<()> {
        let insert = TextRecordInsert::new(record);

        sqlx::query(
            r#"
            INSERT INTO text_records (id, text, sentiment_score, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(insert.id)
        .bind(insert.text)
        .bind(insert.sentiment_score)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || duplicate_record(record.id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<TextRecord>> {
        let result = sqlx::query_as::<_, TextRecordModel>(
            r#"
            SELECT id, text, sentiment_score, created_at
            FROM text_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TextRecord::from))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TextRecord>> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let results = sqlx::query_as::<_, TextRecordModel>(
            r#"
            SELECT id, text, sentiment_score, created_at
            FROM text_records
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TextRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_since(&self, since: DateTime<Utc>, limit: i64) -> RepoResult<Vec<TextRecord>> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let results = sqlx::query_as::<_, TextRecordModel>(
            r#"
            SELECT id, text, sentiment_score, created_at
            FROM text_records
            WHERE created_at >= $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TextRecord::from).collect())
    }
}
