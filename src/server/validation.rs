//! Configuration validation
//!
//! Rejects settings the server cannot run with and warns about risky ones.

use super::config::AppConfig;
use anyhow::{bail, Result};
use tracing::warn;

/// Validate configuration before startup
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.log.path.as_os_str().is_empty() {
        bail!("log.path must not be empty");
    }

    if config.provider.model.trim().is_empty() {
        bail!("provider.model must not be empty");
    }

    if config.stream.interval_secs == 0 {
        bail!("stream.interval_secs must be greater than zero");
    }

    if config.provider.api_key.is_none() {
        warn!("WRITER_API_KEY is not set. Log summaries will use the statistics fallback.");
    }

    if config.server.cors_origins.iter().any(|o| o == "*") {
        warn!("CORS allows any origin ('*') with credentials.");
    }

    Ok(())
}
