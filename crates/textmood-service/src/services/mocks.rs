//! In-memory port implementations for service tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use textmood_core::{
    sort_newest_first, DomainError, RepoResult, SentimentAnalyzer, TextRecord,
    TextRecordAnnouncer, TextRecordRepository,
};

#[derive(Default)]
pub struct MockRepository {
    records: Mutex<Vec<TextRecord>>,
    fail: bool,
}

impl MockRepository {
    pub fn with_records(records: Vec<TextRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn records(&self) -> Vec<TextRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TextRecordRepository for MockRepository {
    async fn create(&self, record: &TextRecord) -> RepoResult<()> {
        self.check()?;
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<TextRecord>> {
        self.check()?;
        Ok(self.records.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TextRecord>> {
        self.check()?;
        let mut records = self.records();
        sort_newest_first(&mut records);
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }

    async fn list_since(&self, since: DateTime<Utc>, limit: i64) -> RepoResult<Vec<TextRecord>> {
        self.check()?;
        let mut records: Vec<_> = self.records().into_iter().filter(|r| r.created_at >= since).collect();
        sort_newest_first(&mut records);
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }
}

#[derive(Default)]
pub struct MockAnnouncer {
    announced: Mutex<Vec<Uuid>>,
    fail: bool,
}

impl MockAnnouncer {
    pub fn failing() -> Self {
        Self {
            announced: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn announced(&self) -> Vec<Uuid> {
        self.announced.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextRecordAnnouncer for MockAnnouncer {
    async fn announce_created(&self, record: &TextRecord) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::CacheError("redis down".to_string()));
        }
        self.announced.lock().unwrap().push(record.id);
        Ok(())
    }
}

pub struct MockAnalyzer {
    result: Result<Option<f64>, String>,
    calls: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    pub fn returning(score: f64) -> Self {
        Self::with_result(Ok(Some(score)))
    }

    pub fn no_score() -> Self {
        Self::with_result(Ok(None))
    }

    pub fn failing() -> Self {
        Self::with_result(Err("status 503".to_string()))
    }

    fn with_result(result: Result<Option<f64>, String>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentAnalyzer for MockAnalyzer {
    async fn score(&self, text: &str) -> Result<Option<f64>, DomainError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.result
            .clone()
            .map_err(|message| DomainError::remote("Text Analytics", message))
    }
}
