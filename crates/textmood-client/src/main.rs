//! TextMood client entry point
//!
//! Run with:
//! ```bash
//! cargo run -p textmood-client
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use textmood_common::{init_tracing, ClientConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing(TracingConfig::default()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        api = %config.api_base_url,
        live_updates = config.redis_url.is_some(),
        light = config.hue.enabled,
        "Starting TextMood client"
    );

    if let Err(e) = textmood_client::run(config).await {
        error!(error = %e, "Client failed");
        std::process::exit(1);
    }
}
