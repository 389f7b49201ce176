//! Server configuration types
//!
//! Contains all configuration structures for the Hitlog server.

use hitlog_core::SummaryOptions;
use hitlog_llm::WriterConfig;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub stream: StreamConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Event log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub path: PathBuf,
}

/// Completion provider configuration
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Filled from WRITER_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
}

// SECURITY: keep the API key out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .finish()
    }
}

impl ProviderConfig {
    /// Writer provider settings derived from this section
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig {
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            default_model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

/// Summary configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_true")]
    pub exclude_unknown: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            exclude_unknown: true,
        }
    }
}

impl SummaryConfig {
    pub fn options(&self) -> SummaryOptions {
        SummaryOptions {
            exclude_unknown: self.exclude_unknown,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Event stream configuration
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StreamConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            duration_secs: default_duration_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    2
}

fn default_duration_secs() -> u64 {
    60
}
