//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use super::config::AppConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat, Map};

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Load configuration from files and the process environment
pub fn load_config() -> Result<AppConfig> {
    let env: Map<String, String> = std::env::vars().collect();
    load_config_from(&env)
}

/// Load configuration using `env` in place of the process environment
pub fn load_config_from(env: &Map<String, String>) -> Result<AppConfig> {
    let profile = env
        .get("HITLOG_ENV")
        .cloned()
        .unwrap_or_else(|| "development".to_string());

    let config = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{profile}")).required(false))
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables: HITLOG_SERVER__PORT=9000
        .add_source(
            Environment::with_prefix("HITLOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .source(Some(env.clone())),
        )
        // 4. Plain variables used by existing deployments (highest priority)
        .set_override_option("server.host", non_empty(env, "HOST"))?
        .set_override_option("server.port", non_empty(env, "PORT"))?
        .set_override_option(
            "server.cors_origins",
            non_empty(env, "CORS_ORIGINS").map(|v| split_origins(&v)),
        )?
        .set_override_option("provider.api_key", non_empty(env, "WRITER_API_KEY"))?
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

fn non_empty(env: &Map<String, String>, key: &str) -> Option<String> {
    env.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = load_config_from(&env(&[])).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.cors_origins.len(), 3);
        assert_eq!(config.log.path.to_str(), Some("data.csv"));
        assert_eq!(config.provider.model, "palmyra-x-003-instruct");
        assert!(config.provider.api_key.is_none());
        assert!(config.summary.exclude_unknown);
        assert_eq!(config.stream.interval_secs, 2);
        assert_eq!(config.stream.duration_secs, 60);
    }

    #[test]
    fn test_prefixed_env_overrides() {
        let config = load_config_from(&env(&[
            ("HITLOG_SERVER__PORT", "9100"),
            ("HITLOG_LOG__PATH", "/tmp/hits.csv"),
            ("HITLOG_SUMMARY__EXCLUDE_UNKNOWN", "false"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.log.path.to_str(), Some("/tmp/hits.csv"));
        assert!(!config.summary.exclude_unknown);
    }

    #[test]
    fn test_plain_env_overrides() {
        let config = load_config_from(&env(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("WRITER_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_plain_env_ignored() {
        let config = load_config_from(&env(&[("PORT", "  "), ("WRITER_API_KEY", "")])).unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_provider_debug_masks_key() {
        let config = load_config_from(&env(&[("WRITER_API_KEY", "top-secret-key")])).unwrap();
        let debug = format!("{:?}", config.provider);
        assert!(!debug.contains("top-secret-key"));
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(split_origins("a, b,,c "), vec!["a", "b", "c"]);
    }
}
