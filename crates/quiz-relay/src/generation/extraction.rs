//! Page transcription and document aggregation

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::config::BackendConfig;
use crate::providers::{CompletionRequest, InferenceBackend};

use super::prompt::PromptBuilder;

/// Characters of each transcription written to the debug log
const PREVIEW_CHARS: usize = 500;

/// Where a document block came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSource {
    /// 1-based position of the image in the request
    Image(usize),
    /// Caller-supplied text
    Supplied,
}

/// One labeled block of the generation document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBlock {
    pub source: BlockSource,
    pub text: String,
}

impl DocumentBlock {
    pub fn label(&self) -> String {
        match self.source {
            BlockSource::Image(index) => format!("Content from Image {}", index),
            BlockSource::Supplied => "OCR-Extracted Content".to_string(),
        }
    }
}

/// Text the question prompt is built from.
///
/// Holds either transcribed image blocks or a single supplied-text block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub blocks: Vec<DocumentBlock>,
}

impl ExtractedDocument {
    /// Wrap caller-supplied text; no backend call is involved
    pub fn from_text(text: &str) -> Self {
        Self {
            blocks: vec![DocumentBlock {
                source: BlockSource::Supplied,
                text: text.to_string(),
            }],
        }
    }

    /// Image positions that produced a block
    pub fn image_indices(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .filter_map(|block| match block.source {
                BlockSource::Image(index) => Some(index),
                BlockSource::Supplied => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render as labeled sections separated by blank lines
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|block| format!("--- {} ---\n{}\n", block.label(), block.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Transcribe each image with the vision model, one call at a time.
///
/// A failed image is logged and left out; it never fails the request.
pub async fn extract_pages(
    backend: &dyn InferenceBackend,
    config: &BackendConfig,
    images: &[String],
) -> ExtractedDocument {
    let total = images.len();
    let prompt = PromptBuilder::build_transcription_prompt();
    let mut document = ExtractedDocument::default();

    tracing::info!(
        "Processing {} images with {} ({})",
        total,
        config.vision_model,
        backend.name()
    );

    for (position, image) in images.iter().enumerate() {
        let index = position + 1;
        tracing::info!("Processing image {}/{}...", index, total);

        let payload = match normalize_image(image) {
            Ok(payload) => payload,
            Err(reason) => {
                tracing::warn!("Skipping image {}: {}", index, reason);
                continue;
            }
        };

        let request =
            CompletionRequest::with_image(config.vision_model.as_str(), prompt.as_str(), payload);

        match backend.generate(&request, config.extraction_timeout()).await {
            Ok(content) => {
                tracing::info!("Successfully processed image {}", index);
                tracing::debug!(
                    "Extracted content preview (image {}):\n{}",
                    index,
                    preview(&content, PREVIEW_CHARS)
                );
                document.blocks.push(DocumentBlock {
                    source: BlockSource::Image(index),
                    text: content,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to process image {}: {}", index, e);
            }
        }
    }

    tracing::info!(
        "Transcribed {}/{} images",
        document.blocks.len(),
        total
    );

    document
}

/// Strip an optional `data:` URL prefix and whitespace, and check the payload decodes
pub fn normalize_image(raw: &str) -> std::result::Result<String, String> {
    let encoded = match raw.strip_prefix("data:") {
        Some(rest) => match rest.split_once(',') {
            Some((meta, data)) if meta.ends_with(";base64") => data,
            _ => return Err("data URL is not base64-encoded".to_string()),
        },
        None => raw,
    };

    let payload: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if payload.is_empty() {
        return Err("empty image payload".to_string());
    }

    BASE64
        .decode(payload.as_bytes())
        .map_err(|e| format!("invalid base64: {}", e))?;

    Ok(payload)
}

/// Longest prefix of at most `limit` characters
fn preview(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
