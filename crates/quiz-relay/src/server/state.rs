//! Application state for the relay server

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::error::Result;
use crate::generation::QuestionPipeline;
use crate::providers::{InferenceBackend, OllamaClient};

/// Shared application state
///
/// Immutable after construction; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RelayConfig,
    /// Inference backend used for health checks and model listing
    backend: Arc<dyn InferenceBackend>,
    /// Question pipeline sharing the same backend
    pipeline: QuestionPipeline,
}

impl AppState {
    /// Create state backed by an Ollama client built from `config`
    pub fn new(config: RelayConfig) -> Result<Self> {
        let ollama = OllamaClient::new(&config.backend)?;
        tracing::info!("Ollama client initialized ({})", ollama.base_url());
        Ok(Self::with_backend(config, Arc::new(ollama)))
    }

    /// Create state around an existing backend
    pub fn with_backend(config: RelayConfig, backend: Arc<dyn InferenceBackend>) -> Self {
        let pipeline = QuestionPipeline::new(Arc::clone(&backend), config.backend.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                pipeline,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    /// Get inference backend
    pub fn backend(&self) -> &Arc<dyn InferenceBackend> {
        &self.inner.backend
    }

    /// Get question pipeline
    pub fn pipeline(&self) -> &QuestionPipeline {
        &self.inner.pipeline
    }
}
