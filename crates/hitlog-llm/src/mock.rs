//! Mock completion provider for testing
//!
//! Returns queued results in order, falling back to a fixed reply once the
//! queue is drained. Every call is counted and its prompt recorded.

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::CompletionProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock provider that returns scripted results
#[derive(Clone, Default)]
pub struct MockProvider {
    queue: Arc<Mutex<VecDeque<Result<CompletionResponse>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful single-choice response
    pub fn push_text(&self, text: impl Into<String>) {
        self.push(Ok(CompletionResponse::from_text(text)));
    }

    /// Queue a failure
    pub fn push_error(&self, error: Error) {
        self.push(Err(error));
    }

    /// Queue an arbitrary result
    pub fn push(&self, result: Result<CompletionResponse>) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(result);
    }

    /// Number of `complete` calls made so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Prompts received, in call order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.prompt);

        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Ok(CompletionResponse::from_text("mock response")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queued_then_default() {
        let mock = MockProvider::new();
        mock.push_text("first");
        mock.push_error(Error::RateLimit);

        let first = mock.complete(CompletionRequest::new("", "a")).await.unwrap();
        assert_eq!(first.first_text(), Some("first"));

        let second = mock.complete(CompletionRequest::new("", "b")).await;
        assert!(matches!(second, Err(Error::RateLimit)));

        let third = mock.complete(CompletionRequest::new("", "c")).await.unwrap();
        assert_eq!(third.first_text(), Some("mock response"));

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.prompts(), vec!["a", "b", "c"]);
    }
}
