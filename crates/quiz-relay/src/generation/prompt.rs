//! Prompt templates for page transcription and question generation

use super::plan::QuestionPlan;

/// JSON schema contract appended to every generation prompt
const FORMAT_INSTRUCTIONS: &str = r#"Format your response as a JSON array with this structure:
[
  {
    "type": "true_false",
    "question": "Question text here",
    "answer": "True" or "False",
    "explanation": "Brief explanation"
  },
  {
    "type": "fill_in_the_blanks",
    "question": "Question with _____ for blanks",
    "answer": "The word(s) that fill the blank(s)"
  },
  {
    "type": "match_the_following",
    "question": "Match the following:",
    "columnA": ["Item 1", "Item 2", "Item 3"],
    "columnB": ["Match A", "Match B", "Match C"],
    "answer": "Correct matches: 1-B, 2-A, 3-C"
  },
  {
    "type": "short_answer",
    "question": "Question text here",
    "answer": "Complete answer in 2-3 sentences"
  },
  {
    "type": "long_answer",
    "question": "Question text here",
    "answer": "Detailed answer in paragraph form"
  },
  {
    "type": "higher_order_thinking",
    "question": "Question requiring analysis/evaluation/creation",
    "answer": "Comprehensive answer with reasoning"
  }
]

Return ONLY the JSON array, no additional text."#;

/// Prompt builder for the two pipeline stages
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the per-page transcription prompt
    pub fn build_transcription_prompt() -> String {
        r#"You are reading a textbook page. Extract ONLY the text that is actually visible and readable on this page.

CRITICAL INSTRUCTIONS:
- Read and transcribe ALL visible text exactly as it appears on the page
- Include headings, paragraphs, bullet points, captions - everything you can read
- Do NOT make up or invent any content
- Do NOT add explanations or interpretations
- Do NOT reference content that is not visible on this specific page
- If you cannot read the text clearly, transcribe what you can see

Format: Plain text transcription of everything readable on this page."#
            .to_string()
    }

    /// Build the question generation prompt over the aggregated document
    pub fn build_question_prompt(document: &str, plan: &QuestionPlan) -> String {
        let allowed = plan
            .allowed_types()
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Based on the following educational content extracted from textbook pages, generate questions.

Content:
{document}

Generate EXACTLY the following questions (DO NOT generate any other types):
{requests}

CRITICAL REQUIREMENTS:
- Questions must be sourced ONLY from the text content provided above
- DO NOT reference diagrams, images, charts, or visual elements (the content above is text-only)
- Only generate the question types listed above - no other types allowed
- Each question must be unique (no repetition)
- Questions should be challenging and educationally valuable for high school or college level students
- Avoid overly simple or childish questions
- For Fill in the Blanks, use _____ to indicate blanks
- For Match the Following, provide two columns (Column A and Column B) with items to match
- For all questions, provide complete and accurate answers

ALLOWED QUESTION TYPES FOR THIS REQUEST: {allowed}

{format}"#,
            document = document,
            requests = plan.request_lines().join("\n"),
            allowed = allowed,
            format = FORMAT_INSTRUCTIONS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;

    #[test]
    fn test_transcription_prompt_forbids_invention() {
        let prompt = PromptBuilder::build_transcription_prompt();
        assert!(prompt.contains("Do NOT make up or invent any content"));
    }

    #[test]
    fn test_question_prompt_embeds_plan_and_document() {
        let plan = QuestionPlan {
            entries: vec![
                (QuestionKind::TrueFalse, 2),
                (QuestionKind::ShortAnswer, 4),
            ],
        };
        let prompt = PromptBuilder::build_question_prompt(
            "--- OCR-Extracted Content ---\nCells divide by mitosis.\n",
            &plan,
        );

        assert!(prompt.contains("Cells divide by mitosis."));
        assert!(prompt.contains("- 2 True/False questions\n- 4 Short Answer questions"));
        assert!(prompt.contains("ALLOWED QUESTION TYPES FOR THIS REQUEST: true_false, short_answer"));
        assert!(prompt.contains("DO NOT reference diagrams"));
        assert!(prompt.ends_with("Return ONLY the JSON array, no additional text."));
    }

    #[test]
    fn test_schema_lists_every_kind() {
        for kind in QuestionKind::ALL {
            assert!(FORMAT_INSTRUCTIONS.contains(&format!("\"type\": \"{}\"", kind.as_str())));
        }
    }
}
