//! Shared HTTP client

use once_cell::sync::Lazy;
use textmood_core::DomainError;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("textmood/", env!("CARGO_PKG_VERSION"));

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
});

/// The process-wide HTTP client
///
/// Per-call timeouts are set on each request.
pub fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// Map a transport or decoding error to a remote call error for `service`
pub fn remote_error(service: &'static str, err: reqwest::Error) -> DomainError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    DomainError::remote(service, message)
}
