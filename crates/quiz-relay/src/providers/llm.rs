//! Inference backend trait used by the question pipeline

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::error::Result;

/// Structured output hint understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
}

/// A single non-streaming completion call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    /// Base64 images attached to the prompt
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl CompletionRequest {
    /// Text-only completion
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            images: Vec::new(),
            format: None,
        }
    }

    /// Completion over exactly one image
    pub fn with_image(model: impl Into<String>, prompt: impl Into<String>, image: String) -> Self {
        Self {
            images: vec![image],
            ..Self::text(model, prompt)
        }
    }

    /// Ask the backend for JSON-formatted output
    pub fn json(mut self) -> Self {
        self.format = Some(OutputFormat::Json);
        self
    }
}

/// Trait for the local inference backend
///
/// Implementations:
/// - `OllamaClient`: Ollama HTTP API (`/api/generate`, `/api/tags`)
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Run one completion and return the raw model text
    ///
    /// Errors: `Generation` on non-success status, `Timeout` when `timeout`
    /// elapses, `BackendUnavailable` when the backend cannot be reached.
    async fn generate(&self, request: &CompletionRequest, timeout: Duration) -> Result<String>;

    /// Return the backend's model list as-is
    async fn list_models(&self) -> Result<serde_json::Value>;

    /// Check that the backend answers its model-list endpoint
    async fn health_check(&self) -> Result<()> {
        self.list_models().await.map(|_| ())
    }

    /// Get backend name for logging
    fn name(&self) -> &str;
}
