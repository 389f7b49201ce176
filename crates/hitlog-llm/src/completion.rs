//! Completion request and response types

use serde::{Deserialize, Serialize};

/// Request for a single text completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier (empty = provider default)
    pub model: String,
    /// Prompt text
    pub prompt: String,
}

impl CompletionRequest {
    /// Create a request for the given model and prompt
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// One generated alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Generated text
    pub text: String,
}

/// Completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated alternatives, best first
    pub choices: Vec<Choice>,
    /// Model that produced the response
    #[serde(default)]
    pub model: Option<String>,
}

impl CompletionResponse {
    /// Build a response with a single choice
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice { text: text.into() }],
            model: None,
        }
    }

    /// Text of the first choice, if any
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}
