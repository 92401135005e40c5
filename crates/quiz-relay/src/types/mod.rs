//! Core types for the question relay

pub mod question;
pub mod request;
pub mod response;

pub use question::{GeneratedQuestion, QuestionKind, TrueFalseAnswer};
pub use request::{GenerateQuestionsRequest, QuestionCounts, QuestionTypeFlags};
pub use response::{ExtractionMode, GenerateQuestionsResponse, QuestionDiagnostic};
