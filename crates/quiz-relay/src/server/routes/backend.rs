//! Backend health and model listing endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::Error;
use crate::server::state::AppState;

/// GET /health - Check that the backend answers `/api/tags`
pub async fn health(State(state): State<AppState>) -> Response {
    match state.backend().health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "ollama": "connected" })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            let error = match e {
                Error::Generation { .. } => "Ollama not responding".to_string(),
                other => other.to_string(),
            };
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "error": error })),
            )
                .into_response()
        }
    }
}

/// GET /models - Pass through the backend's model list
pub async fn list_models(State(state): State<AppState>) -> Response {
    match state.backend().list_models().await {
        Ok(models) => (StatusCode::OK, Json(models)).into_response(),
        Err(e) => {
            tracing::warn!("Model listing failed: {}", e);
            let error = match e {
                Error::Generation { .. } => "Failed to fetch models".to_string(),
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error })),
            )
                .into_response()
        }
    }
}
