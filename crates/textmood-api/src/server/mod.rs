//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use textmood_cache::{Publisher, RedisPool};
use textmood_common::{AppConfig, AppError};
use textmood_db::{create_pool, run_migrations, PgTextRecordRepository};
use textmood_service::{ServiceContextBuilder, TextAnalyticsClient};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the basic stack only, so they are never rate limited.
///
/// # Errors
/// `AppError::Config` when the rate limit settings are unusable.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let redis_pool = RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    let publisher = Arc::new(Publisher::new(redis_pool.clone()));

    if !config.sentiment.is_configured() {
        warn!("SENTIMENT_API_KEY not set; every message will score as unknown");
    }
    let analyzer = Arc::new(TextAnalyticsClient::from_config(&config.sentiment));

    let service_context = ServiceContextBuilder::new()
        .text_record_repo(Arc::new(PgTextRecordRepository::new(pool.clone())))
        .pool(pool)
        .redis_pool(Arc::new(redis_pool))
        .announcer(publisher)
        .sentiment_analyzer(analyzer)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
