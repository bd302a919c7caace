//! Service context - dependency container for services
//!
//! Holds the ports the services drive plus the pools probed by readiness checks.

use std::sync::Arc;

use textmood_cache::SharedRedisPool;
use textmood_core::{SentimentAnalyzer, TextRecordAnnouncer, TextRecordRepository};
use textmood_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Pools, probed by readiness checks
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,

    // Ports
    text_record_repo: Arc<dyn TextRecordRepository>,
    announcer: Arc<dyn TextRecordAnnouncer>,
    sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the PostgreSQL connection pool, if one is attached
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the Redis connection pool, if one is attached
    pub fn redis_pool(&self) -> Option<&SharedRedisPool> {
        self.redis_pool.as_ref()
    }

    /// Get the text record repository
    pub fn text_record_repo(&self) -> &dyn TextRecordRepository {
        self.text_record_repo.as_ref()
    }

    /// Get the record announcer
    pub fn announcer(&self) -> &dyn TextRecordAnnouncer {
        self.announcer.as_ref()
    }

    /// Get the sentiment analyzer
    pub fn sentiment_analyzer(&self) -> &dyn SentimentAnalyzer {
        self.sentiment_analyzer.as_ref()
    }

    /// Check database connectivity; `false` when no pool is attached
    pub async fn database_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.acquire().await.is_ok(),
            None => false,
        }
    }

    /// Check Redis connectivity; `false` when no pool is attached
    pub async fn redis_healthy(&self) -> bool {
        match &self.redis_pool {
            Some(pool) => pool.health_check().await.is_ok(),
            None => false,
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("redis_pool", &self.redis_pool.as_ref().map(|_| "SharedRedisPool"))
            .field("ports", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    text_record_repo: Option<Arc<dyn TextRecordRepository>>,
    announcer: Option<Arc<dyn TextRecordAnnouncer>>,
    sentiment_analyzer: Option<Arc<dyn SentimentAnalyzer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn text_record_repo(mut self, repo: Arc<dyn TextRecordRepository>) -> Self {
        self.text_record_repo = Some(repo);
        self
    }

    pub fn announcer(mut self, announcer: Arc<dyn TextRecordAnnouncer>) -> Self {
        self.announcer = Some(announcer);
        self
    }

    pub fn sentiment_analyzer(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.sentiment_analyzer = Some(analyzer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any port is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            redis_pool: self.redis_pool,
            text_record_repo: self
                .text_record_repo
                .ok_or_else(|| ServiceError::validation("text_record_repo is required"))?,
            announcer: self
                .announcer
                .ok_or_else(|| ServiceError::validation("announcer is required"))?,
            sentiment_analyzer: self
                .sentiment_analyzer
                .ok_or_else(|| ServiceError::validation("sentiment_analyzer is required"))?,
        })
    }
}
