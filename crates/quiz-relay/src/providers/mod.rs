//! Provider abstraction for the inference backend
//!
//! The pipeline only talks to `dyn InferenceBackend`, so the Ollama client
//! is injected at construction time.

pub mod llm;
pub mod ollama;

#[cfg(test)]
pub(crate) mod testing;

pub use llm::{CompletionRequest, InferenceBackend, OutputFormat};
pub use ollama::OllamaClient;
