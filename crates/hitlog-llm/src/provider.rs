//! Completion provider trait definition

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::Result;

/// Trait for text-completion providers
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Complete a prompt
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
