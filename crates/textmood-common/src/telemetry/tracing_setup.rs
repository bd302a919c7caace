//! Tracing and logging setup
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from
//! [`TracingConfig::filter_directives`].

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Dependencies that are chatty at `info` and `debug`
const QUIET_TARGETS: &[&str] = &["sqlx", "hyper_util", "h2"];

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    /// One JSON object per line instead of human-readable text
    pub json: bool,
    /// Log span open and close, which shows per-request timing
    pub span_events: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                span_events: true,
                ..Self::default()
            },
            Environment::Staging => Self::default(),
            Environment::Production => Self {
                json: true,
                ..Self::default()
            },
        }
    }

    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = self.level.as_str().to_lowercase();
        for target in QUIET_TARGETS {
            directives.push_str(&format!(",{target}=warn"));
        }
        directives
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Install the global subscriber; fails if one is already set
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));
    let spans = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_span_events(spans))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_span_events(spans))
            .try_init()
    };
    result.map_err(|_| TracingError::AlreadyInitialized)
}
