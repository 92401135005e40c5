//! Response types for question generation

use serde::{Deserialize, Serialize};

use super::question::{GeneratedQuestion, QuestionKind};

/// Where the generation document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// Caller supplied pre-extracted text
    #[serde(rename = "ocr-direct")]
    OcrDirect,
    /// Pages were transcribed by the vision model
    #[serde(rename = "llava")]
    Vision,
}

/// A requested-type element the model produced but that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDiagnostic {
    /// Position in the parsed model array
    pub index: usize,
    /// Declared question kind
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Why the element was rejected
    pub reason: String,
}

/// Body of a successful `POST /generate-questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    /// Questions of the requested kinds, in model order
    pub questions: Vec<GeneratedQuestion>,
    /// Extraction mode used for this request
    pub model: ExtractionMode,
    /// Number of images supplied (0 in text mode)
    pub image_count: usize,
    /// Character length of the supplied text (0 in image mode)
    pub ocr_length: usize,
    /// Requested-type elements dropped by validation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<QuestionDiagnostic>,
}
