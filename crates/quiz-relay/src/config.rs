//! Configuration for the question relay

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Main relay configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Inference backend (Ollama) configuration
    pub backend: BackendConfig,
}

impl RelayConfig {
    /// Load configuration from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Apply `OLLAMA_API`, `HOST`, `PORT`, `QUIZ_VISION_MODEL` and `QUIZ_TEXT_MODEL`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OLLAMA_API") {
            self.backend.base_url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT: {}", port)))?;
        }
        if let Some(model) = lookup("QUIZ_VISION_MODEL") {
            self.backend.vision_model = model;
        }
        if let Some(model) = lookup("QUIZ_TEXT_MODEL") {
            self.backend.text_model = model;
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum request body size in bytes (images arrive inline as base64)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            enable_cors: true,
            max_body_size: 50 * 1024 * 1024, // 50MB
        }
    }
}

/// Inference backend (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Vision model used for page transcription
    pub vision_model: String,
    /// Text model used for question generation
    pub text_model: String,
    /// Per-image transcription timeout in seconds
    pub extraction_timeout_secs: u64,
    /// Question generation timeout in seconds
    pub generation_timeout_secs: u64,
    /// Timeout for `/api/tags` lookups in seconds
    pub health_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            vision_model: "llava:7b".to_string(),
            text_model: "gemma3:4b".to_string(),
            extraction_timeout_secs: 120,
            generation_timeout_secs: 180,
            health_timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.server.port, 5002);
        assert_eq!(config.backend.base_url, "http://localhost:11434");
        assert_eq!(config.backend.extraction_timeout(), Duration::from_secs(120));
        assert_eq!(config.backend.generation_timeout(), Duration::from_secs(180));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RelayConfig::from_toml_str(
            r#"
            [backend]
            base_url = "http://gpu-box:11434"
            text_model = "llama3.2:3b"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "http://gpu-box:11434");
        assert_eq!(config.backend.text_model, "llama3.2:3b");
        assert_eq!(config.backend.vision_model, "llava:7b");
        assert_eq!(config.server.port, 5002);
    }

    #[test]
    fn test_invalid_toml() {
        let err = RelayConfig::from_toml_str("[server]\nport = \"abc\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("OLLAMA_API", "http://10.0.0.5:11434"),
            ("PORT", "8088"),
            ("QUIZ_VISION_MODEL", "llava:13b"),
        ]
        .into_iter()
        .collect();

        let mut config = RelayConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.backend.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.backend.vision_model, "llava:13b");
        assert_eq!(config.backend.text_model, "gemma3:4b");
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = RelayConfig::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
