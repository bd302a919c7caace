//! PostgreSQL connection pool and migrations

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use textmood_common::DatabaseConfig;

/// Longest wait for a free connection
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Idle connections above `min_connections` are closed after this long
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Schema migrations, embedded at build time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .connect(&config.url)
        .await
}

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(count = MIGRATOR.iter().count(), "Database migrations applied");
    Ok(())
}
