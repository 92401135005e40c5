//! HTTP routes for the relay server

pub mod backend;
pub mod questions;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all routes
pub fn relay_routes(max_body_size: usize) -> Router<AppState> {
    Router::new()
        // Backend status
        .route("/health", get(backend::health))
        .route("/models", get(backend::list_models))
        // Generation - with larger body limit for inline images
        .route(
            "/generate-questions",
            post(questions::generate_questions).layer(DefaultBodyLimit::max(max_body_size)),
        )
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "quiz-relay",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Generates typed quiz questions from textbook page images or text",
        "endpoints": {
            "GET /health": "Backend health check",
            "GET /models": "Models available on the backend",
            "POST /generate-questions": "Generate questions from images or OCR text",
            "GET /info": "This document"
        }
    }))
}
