//! quiz-relay: HTTP relay turning textbook pages into typed quiz questions
//!
//! Page images are transcribed one at a time by a vision model on a local
//! Ollama backend, the transcripts (or caller-supplied OCR text) are sent to a
//! text model with a strict JSON schema, and the reply is recovered, validated
//! and filtered down to the question kinds the caller asked for.

pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod server;
pub mod types;

pub use config::RelayConfig;
pub use error::{Error, Result};
pub use server::{router, state::AppState, RelayServer};
pub use types::{
    question::{GeneratedQuestion, QuestionKind},
    request::GenerateQuestionsRequest,
    response::{ExtractionMode, GenerateQuestionsResponse},
};
