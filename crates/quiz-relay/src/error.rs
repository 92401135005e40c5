//! Error types for the question relay

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Relay errors
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, rejected before any backend call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend refused or could not be reached
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend exceeded the per-call time budget
    #[error("Backend timed out: {0}")]
    Timeout(String),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    Generation { status: u16, body: String },

    /// Backend succeeded but its output is not a recoverable JSON array
    #[error("Malformed model output: {reason}")]
    MalformedResponse { raw: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a generation error from a backend status and raw body
    pub fn generation(status: u16, body: impl Into<String>) -> Self {
        Self::Generation {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error keeping the raw model text
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Classify a transport failure from the backend client
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::BackendUnavailable(err.to_string())
        } else {
            Self::internal(format!("Backend request failed: {}", err))
        }
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Error::Generation { .. }
            | Error::MalformedResponse { .. }
            | Error::Config(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            Error::Validation(msg) => json!({ "error": msg }),
            Error::BackendUnavailable(_) => json!({
                "error": "Cannot connect to Ollama",
                "details": "Make sure Ollama is running. Install from https://ollama.com and run: ollama serve",
            }),
            Error::Timeout(_) => json!({
                "error": "Request timeout",
                "details": "The AI model took too long to respond. Try with fewer images.",
            }),
            Error::Generation { body, .. } => json!({
                "error": "Failed to generate questions",
                "details": body,
            }),
            Error::MalformedResponse { raw, reason } => json!({
                "error": "Failed to parse AI response",
                "details": "The model did not return valid JSON",
                "parse_error": reason,
                "raw_response": raw,
            }),
            Error::Config(msg) | Error::Internal(msg) => json!({
                "error": "Failed to generate questions",
                "details": msg,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_of(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generation_error_surfaces_backend_body() {
        let (status, body) = body_of(Error::generation(500, "model crashed")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "model crashed");
    }

    #[tokio::test]
    async fn test_malformed_response_keeps_raw_text() {
        let (status, body) = body_of(Error::malformed("not json at all", "no array")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["raw_response"], "not json at all");
        assert_eq!(body["parse_error"], "no array");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        assert_eq!(
            Error::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::BackendUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            Error::Timeout("x".into()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );

        let (_, body) = body_of(Error::validation("No images or text provided")).await;
        assert_eq!(body["error"], "No images or text provided");
    }

    #[tokio::test]
    async fn test_internal_error_details() {
        let (status, body) = body_of(Error::internal("Backend request failed: decode")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "Backend request failed: decode");
    }
}
