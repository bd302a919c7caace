//! Middleware stack for the API server
//!
//! Request ids, tracing spans, timeouts, CORS and rate limiting.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use textmood_common::{AppError, CorsConfig, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{Level, Span};

use crate::extractors::WEBHOOK_KEY_HEADER;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request timeout; exceeding it answers 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Span per request, tagged with its request id
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        // Path only: the query string may carry the webhook key
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

/// Apply the basic middleware stack (no rate limiting)
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(RequestSpan)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    )
}

/// Apply middleware stack with rate limiting and configured CORS
///
/// # Errors
/// `AppError::Config` when the rate limit settings are unusable (zero rate or burst).
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    // One bucket for the whole server
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rate_limit_config.requests_per_second.into())
        .burst_size(rate_limit_config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(|| {
            AppError::Config(format!(
                "invalid rate limit: {} requests/s, burst {}",
                rate_limit_config.requests_per_second, rate_limit_config.burst
            ))
        })?;

    // Layers wrap in reverse: RateLimit -> RequestID -> Trace -> Timeout -> CORS -> Handler
    Ok(router
        .layer(create_cors_layer(cors_config, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RequestSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .layer(GovernorLayer {
            config: Arc::new(governor_conf),
        }))
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static(WEBHOOK_KEY_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-ratelimit-limit"),
            header::HeaderName::from_static("x-ratelimit-remaining"),
            header::HeaderName::from_static("x-ratelimit-reset"),
        ]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!("Invalid CORS origin: {}", origin);
                    None
                })
            })
            .collect();

        tracing::info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}
