//! # textmood-db
//!
//! Database layer implementing [`TextRecordRepository`](textmood_core::TextRecordRepository)
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use textmood_db::{create_pool, run_migrations, PgTextRecordRepository};
//!
//! async fn example(config: &textmood_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgTextRecordRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, MIGRATOR};
pub use repositories::PgTextRecordRepository;
