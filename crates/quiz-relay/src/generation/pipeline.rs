//! Two-stage question pipeline: transcribe, then generate and recover

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::error::Result;
use crate::providers::{CompletionRequest, InferenceBackend};
use crate::types::{ExtractionMode, GenerateQuestionsRequest, GenerateQuestionsResponse};

use super::extraction::{extract_pages, ExtractedDocument};
use super::plan::QuestionPlan;
use super::prompt::PromptBuilder;
use super::recovery::recover_questions;

/// Runs one generate-questions request against the backend.
///
/// Backend calls are strictly sequential: N transcriptions, then one
/// generation. Nothing is shared between requests.
#[derive(Clone)]
pub struct QuestionPipeline {
    backend: Arc<dyn InferenceBackend>,
    config: BackendConfig,
}

impl QuestionPipeline {
    pub fn new(backend: Arc<dyn InferenceBackend>, config: BackendConfig) -> Self {
        Self { backend, config }
    }

    /// Validate, build the document, generate, recover and filter
    pub async fn run(&self, request: &GenerateQuestionsRequest) -> Result<GenerateQuestionsResponse> {
        let plan = QuestionPlan::build(request)?;

        let (document, mode) = match request.raw_text() {
            Some(text) => {
                tracing::info!("Using provided OCR text ({} characters)", text.chars().count());
                (ExtractedDocument::from_text(text), ExtractionMode::OcrDirect)
            }
            None => {
                let document =
                    extract_pages(self.backend.as_ref(), &self.config, &request.images).await;
                (document, ExtractionMode::Vision)
            }
        };

        if document.is_empty() {
            tracing::warn!("No page could be transcribed; generating from an empty document");
        }

        let raw = self.generate(&document, &plan).await?;
        let recovered = recover_questions(&raw, &plan)?;

        let (image_count, ocr_length) = match mode {
            ExtractionMode::OcrDirect => (0, request.raw_text().map_or(0, |t| t.chars().count())),
            ExtractionMode::Vision => (request.images.len(), 0),
        };

        Ok(GenerateQuestionsResponse {
            questions: recovered.questions,
            model: mode,
            image_count,
            ocr_length,
            skipped: recovered.skipped,
        })
    }

    /// Issue the single JSON-mode generation call
    async fn generate(&self, document: &ExtractedDocument, plan: &QuestionPlan) -> Result<String> {
        let content = document.render();

        tracing::info!("Generating questions from extracted content...");
        tracing::info!("Combined content length: {} characters", content.chars().count());

        let prompt = PromptBuilder::build_question_prompt(&content, plan);
        let request = CompletionRequest::text(self.config.text_model.as_str(), prompt).json();

        self.backend
            .generate(&request, self.config.generation_timeout())
            .await
            .inspect_err(|e| tracing::error!("Question generation failed: {}", e))
    }
}
