//! Request validation and question-type bookkeeping

use crate::error::{Error, Result};
use crate::types::{GenerateQuestionsRequest, QuestionKind};

/// What the generation prompt asks for and what the filter lets through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPlan {
    /// Requested kinds with their counts, in declaration order
    pub entries: Vec<(QuestionKind, u32)>,
}

impl QuestionPlan {
    /// Validate the request and derive the plan.
    ///
    /// Rejects requests with neither images nor text, and image requests
    /// that select no question kind. No backend call is made on rejection.
    pub fn build(request: &GenerateQuestionsRequest) -> Result<Self> {
        if !request.has_images() && request.raw_text().is_none() {
            return Err(Error::validation("No images or text provided"));
        }

        let entries: Vec<(QuestionKind, u32)> = QuestionKind::ALL
            .into_iter()
            .filter(|kind| request.question_types.is_requested(*kind))
            .map(|kind| (kind, request.counts.count_for(kind)))
            .collect();

        if entries.is_empty() && request.raw_text().is_none() {
            return Err(Error::validation("No question types selected"));
        }

        Ok(Self { entries })
    }

    /// Prompt lines such as `- 5 True/False questions`
    pub fn request_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(kind, count)| format!("- {} {} questions", count, kind.label()))
            .collect()
    }

    /// Kinds the response filter keeps
    pub fn allowed_types(&self) -> Vec<QuestionKind> {
        self.entries.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn allows(&self, kind: QuestionKind) -> bool {
        self.entries.iter().any(|(allowed, _)| *allowed == kind)
    }
}
