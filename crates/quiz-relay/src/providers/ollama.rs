//! Ollama HTTP client implementing [`InferenceBackend`]

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::BackendConfig;
use crate::error::{Error, Result};

use super::llm::{CompletionRequest, InferenceBackend};

/// Ollama API client
///
/// No retries: a failed call fails its stage immediately.
pub struct OllamaClient {
    /// HTTP client
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
    /// Timeout for `/api/tags`
    tags_timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(flatten)]
    request: &'a CompletionRequest,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a new Ollama client
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tags_timeout: config.health_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(&self, request: &CompletionRequest, timeout: Duration) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        tracing::debug!(
            "POST {} (model: {}, images: {}, timeout: {:?})",
            url,
            request.model,
            request.images.len(),
            timeout
        );

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(&GenerateRequest {
                request,
                stream: false,
            })
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(status.as_u16(), body));
        }

        let generate_response: GenerateResponse =
            response.json().await.map_err(Error::from_transport)?;

        Ok(generate_response.response)
    }

    async fn list_models(&self) -> Result<serde_json::Value> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.tags_timeout)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(status.as_u16(), body));
        }

        response.json().await.map_err(Error::from_transport)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig {
            base_url: "http://localhost:11434/".to_string(),
            ..Default::default()
        };
        let client = OllamaClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_wire_body_is_non_streaming() {
        let request = CompletionRequest::text("gemma3:4b", "prompt").json();
        let encoded = serde_json::to_value(GenerateRequest {
            request: &request,
            stream: false,
        })
        .unwrap();

        assert_eq!(
            encoded,
            json!({
                "model": "gemma3:4b",
                "prompt": "prompt",
                "format": "json",
                "stream": false
            })
        );
    }
}
