//! Hitlog LLM - Text-completion provider abstraction
//!
//! This crate provides the summarization side of hitlog:
//! - Provider: `CompletionProvider` trait for prompt-in, choices-out backends
//! - Writer: Writer completions API provider (Palmyra models)
//! - Client: `SummarizationClient`, prompt in, first choice text out
//! - Mock: scripted provider with a call counter for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod completion;
pub mod error;
pub mod mock;
pub mod provider;
pub mod writer;

pub use client::SummarizationClient;
pub use completion::{Choice, CompletionRequest, CompletionResponse};
pub use error::{Error, Result};
pub use mock::MockProvider;
pub use provider::CompletionProvider;
pub use writer::{WriterConfig, WriterProvider};
