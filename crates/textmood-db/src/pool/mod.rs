//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, run_migrations, ACQUIRE_TIMEOUT, IDLE_TIMEOUT, MIGRATOR};

pub use sqlx::postgres::PgPool;
