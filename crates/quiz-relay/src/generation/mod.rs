//! Question generation: planning, transcription, prompting and recovery

pub mod extraction;
pub mod pipeline;
pub mod plan;
pub mod prompt;
pub mod recovery;

pub use extraction::{extract_pages, ExtractedDocument};
pub use pipeline::QuestionPipeline;
pub use plan::QuestionPlan;
pub use prompt::PromptBuilder;
pub use recovery::{recover_questions, RecoveredQuestions};
