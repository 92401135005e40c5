//! Scripted backend for unit tests

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use std::time::Duration;

use crate::error::{Error, Result};

use super::llm::{CompletionRequest, InferenceBackend};

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String> + Send + Sync>;

/// Backend that answers from a closure and records every call
pub(crate) struct ScriptedBackend {
    responder: Responder,
    calls: Mutex<Vec<(CompletionRequest, Duration)>>,
    reachable: bool,
}

impl ScriptedBackend {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            reachable: true,
        }
    }

    /// Backend whose every call fails with a connection error
    pub(crate) fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new(|_| Err(Error::BackendUnavailable("connection refused".into())))
        }
    }

    pub(crate) fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().iter().map(|(req, _)| req.clone()).collect()
    }

    pub(crate) fn timeouts(&self) -> Vec<Duration> {
        self.calls.lock().iter().map(|(_, t)| *t).collect()
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn generate(&self, request: &CompletionRequest, timeout: Duration) -> Result<String> {
        self.calls.lock().push((request.clone(), timeout));
        (self.responder)(request)
    }

    async fn list_models(&self) -> Result<serde_json::Value> {
        if self.reachable {
            Ok(json!({"models": [{"name": "llava:7b"}, {"name": "gemma3:4b"}]}))
        } else {
            Err(Error::BackendUnavailable("connection refused".into()))
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
