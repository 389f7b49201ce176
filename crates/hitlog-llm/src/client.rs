//! Summarization client
//!
//! Thin adapter over a [`CompletionProvider`]: sends one prompt with the
//! configured model and returns the first generated choice. It never
//! retries; callers decide what a failure means.

use crate::completion::CompletionRequest;
use crate::error::{Error, Result};
use crate::provider::CompletionProvider;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Prompt-in, text-out client over an injected provider
#[derive(Clone)]
pub struct SummarizationClient {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl SummarizationClient {
    /// Create a client using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        let model = provider.default_model().to_string();
        Self { provider, model }
    }

    /// Override the model identifier sent with every request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Model identifier in use
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate text for `prompt`, returning the first choice
    #[instrument(skip(self, prompt), fields(provider = %self.provider.name(), model = %self.model))]
    pub async fn summarize(&self, prompt: &str) -> Result<String> {
        let response = self
            .provider
            .complete(CompletionRequest::new(&self.model, prompt))
            .await?;

        let text = response
            .first_text()
            .ok_or_else(|| Error::InvalidResponse("No choices in response".to_string()))?;

        debug!(len = text.len(), "Summary generated");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionResponse;
    use crate::mock::MockProvider;

    #[tokio::test]
    async fn test_returns_first_choice() {
        let mock = MockProvider::new();
        mock.push(Ok(CompletionResponse {
            choices: vec![
                crate::Choice { text: "first".to_string() },
                crate::Choice { text: "second".to_string() },
            ],
            model: None,
        }));
        let client = SummarizationClient::new(Arc::new(mock.clone()));

        assert_eq!(client.summarize("prompt").await.unwrap(), "first");
        assert_eq!(mock.prompts(), vec!["prompt"]);
    }

    #[tokio::test]
    async fn test_no_choices_is_invalid_response() {
        let mock = MockProvider::new();
        mock.push(Ok(CompletionResponse {
            choices: vec![],
            model: None,
        }));
        let client = SummarizationClient::new(Arc::new(mock));

        let err = client.summarize("prompt").await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_provider_error_passes_through_without_retry() {
        let mock = MockProvider::new();
        mock.push_error(Error::Network("connection refused".to_string()));
        let client = SummarizationClient::new(Arc::new(mock.clone()));

        let err = client.summarize("prompt").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_model_defaults_to_provider() {
        let client = SummarizationClient::new(Arc::new(MockProvider::new()));
        assert_eq!(client.model(), "mock-model");
        assert_eq!(client.with_model("palmyra").model(), "palmyra");
    }
}
