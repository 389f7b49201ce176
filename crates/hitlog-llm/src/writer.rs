//! Writer - Palmyra text-completion provider
//!
//! Calls the Writer completions endpoint (`POST {base_url}/completions`)
//! with a bearer API key and a `{model, prompt}` body.

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::CompletionProvider;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Writer API base URL
pub const WRITER_API_BASE: &str = "https://api.writer.com/v1";

/// Default Writer model
pub const DEFAULT_MODEL: &str = "palmyra-x-003-instruct";

/// Writer provider configuration
#[derive(Clone)]
pub struct WriterConfig {
    /// API key (requests fail with `NotConfigured` when absent)
    pub api_key: Option<String>,
    /// Base URL
    pub base_url: String,
    /// Default model
    pub default_model: String,
    /// Request timeout
    pub timeout: Duration,
}

// SECURITY: Custom Debug implementation to mask API key
impl fmt::Debug for WriterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Mask API key for safe display
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}

/// Sanitize API error messages
fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();

    if lower.contains("api key") || lower.contains("apikey") || lower.contains("unauthorized") {
        return "API authentication error. Please check your WRITER_API_KEY.".to_string();
    }

    if lower.contains("internal") || lower.contains("server error") {
        return "Writer server error. Please try again later.".to_string();
    }

    if error.len() < 200 && !lower.contains("bearer") {
        return error.to_string();
    }

    "An API error occurred. Please try again.".to_string()
}

impl WriterConfig {
    /// Create a new configuration with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: WRITER_API_BASE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A missing `WRITER_API_KEY` is not an error here; the provider
    /// reports it on each request instead.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("WRITER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Self {
            api_key,
            base_url: WRITER_API_BASE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Writer completions provider
pub struct WriterProvider {
    client: Client,
    config: WriterConfig,
}

impl WriterProvider {
    /// Create a new Writer provider
    pub fn new(config: WriterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(WriterConfig::from_env())
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.config.timeout.as_millis() as u64)
        } else {
            Error::Network(sanitize_api_error(&err.to_string()))
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for WriterProvider {
    fn name(&self) -> &str {
        "writer"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model, prompt_len = request.prompt.len()))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::NotConfigured("WRITER_API_KEY not set".to_string()))?;

        let body = if request.model.is_empty() {
            CompletionRequest::new(&self.config.default_model, request.prompt)
        } else {
            request
        };

        debug!("Sending request to Writer");

        let response = self
            .client
            .post(format!("{}/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Auth(sanitize_api_error(&error_text))
                }
                StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
                _ => Error::Api(format!("{}: {}", status, sanitize_api_error(&error_text))),
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        debug!(choices = completion.choices.len(), "Writer response received");
        Ok(completion)
    }
}
