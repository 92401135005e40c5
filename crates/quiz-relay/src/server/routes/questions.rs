//! Question generation endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::Error;
use crate::server::state::AppState;
use crate::types::{GenerateQuestionsRequest, GenerateQuestionsResponse};

/// POST /generate-questions - Turn page images or text into quiz questions
///
/// Unreadable bodies (e.g. over the size limit) keep axum's status; bodies
/// that read but fail to parse are a 400.
pub async fn generate_questions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(JsonRejection::BytesRejection(e)) => {
            tracing::warn!("Rejected request body: {}", e.body_text());
            return (e.status(), Json(serde_json::json!({ "error": e.body_text() }))).into_response();
        }
        Err(e) => {
            return Error::validation(format!("Invalid request body: {}", e.body_text())).into_response();
        }
    };

    let start = Instant::now();
    let span = tracing::info_span!("generate_questions", request_id = %Uuid::new_v4());

    async move {
        tracing::info!(
            "Request: {} images, ocr text: {}",
            request.images.len(),
            request.raw_text().is_some()
        );

        let response = state.pipeline().run(&request).await?;

        tracing::info!(
            "Returned {} questions in {}ms",
            response.questions.len(),
            start.elapsed().as_millis()
        );

        Ok::<_, Error>(Json(response))
    }
    .instrument(span)
    .await
    .into_response()
}
