//! Inbound request types for question generation

use serde::{Deserialize, Deserializer, Serialize};

use super::question::QuestionKind;

/// Body of `POST /generate-questions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    /// Page images, bare base64 or `data:` URLs
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Pre-extracted text; when present, images are not transcribed
    #[serde(default)]
    pub ocr_text: Option<String>,

    /// Which kinds to generate
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_types: QuestionTypeFlags,

    /// How many of each kind to ask for
    #[serde(default, deserialize_with = "null_as_default")]
    pub counts: QuestionCounts,
}

impl GenerateQuestionsRequest {
    /// Caller-supplied text, if non-empty
    pub fn raw_text(&self) -> Option<&str> {
        self.ocr_text.as_deref().filter(|text| !text.is_empty())
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Requested flag per question kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionTypeFlags {
    #[serde(deserialize_with = "null_as_default")]
    pub true_false: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fill_in_the_blanks: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub match_the_following: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub short_answer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub long_answer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub higher_order_thinking: bool,
}

impl QuestionTypeFlags {
    pub fn is_requested(&self, kind: QuestionKind) -> bool {
        match kind {
            QuestionKind::TrueFalse => self.true_false,
            QuestionKind::FillInTheBlanks => self.fill_in_the_blanks,
            QuestionKind::MatchTheFollowing => self.match_the_following,
            QuestionKind::ShortAnswer => self.short_answer,
            QuestionKind::LongAnswer => self.long_answer,
            QuestionKind::HigherOrderThinking => self.higher_order_thinking,
        }
    }

    pub fn any(&self) -> bool {
        QuestionKind::ALL.iter().any(|kind| self.is_requested(*kind))
    }
}

/// Optional count per question kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionCounts {
    pub true_false: Option<u32>,
    pub fill_in_the_blanks: Option<u32>,
    pub match_the_following: Option<u32>,
    pub short_answer: Option<u32>,
    pub long_answer: Option<u32>,
    pub higher_order_thinking: Option<u32>,
}

impl QuestionCounts {
    /// Count for a kind, falling back to its default
    pub fn count_for(&self, kind: QuestionKind) -> u32 {
        let supplied = match kind {
            QuestionKind::TrueFalse => self.true_false,
            QuestionKind::FillInTheBlanks => self.fill_in_the_blanks,
            QuestionKind::MatchTheFollowing => self.match_the_following,
            QuestionKind::ShortAnswer => self.short_answer,
            QuestionKind::LongAnswer => self.long_answer,
            QuestionKind::HigherOrderThinking => self.higher_order_thinking,
        };
        supplied.unwrap_or_else(|| kind.default_count())
    }
}

/// Explicit `null` reads as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_body() {
        let request: GenerateQuestionsRequest = serde_json::from_str(
            r#"{
                "images": [],
                "ocrText": "Photosynthesis converts light into chemical energy.",
                "questionTypes": {"trueFalse": true, "longAnswer": true},
                "counts": {"trueFalse": 2, "longAnswer": null}
            }"#,
        )
        .unwrap();

        assert!(request.question_types.is_requested(QuestionKind::TrueFalse));
        assert!(!request.question_types.is_requested(QuestionKind::ShortAnswer));
        assert_eq!(request.counts.count_for(QuestionKind::TrueFalse), 2);
        assert_eq!(request.counts.count_for(QuestionKind::LongAnswer), 3);
        assert_eq!(request.counts.count_for(QuestionKind::ShortAnswer), 5);
        assert!(request.raw_text().is_some());
    }

    #[test]
    fn test_empty_body_defaults() {
        let request: GenerateQuestionsRequest = serde_json::from_str("{}").unwrap();
        assert!(!request.has_images());
        assert!(request.raw_text().is_none());
        assert!(!request.question_types.any());
    }

    #[test]
    fn test_empty_ocr_text_is_absent() {
        let request = GenerateQuestionsRequest {
            ocr_text: Some(String::new()),
            ..Default::default()
        };
        assert!(request.raw_text().is_none());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let request: GenerateQuestionsRequest = serde_json::from_str(
            r#"{"images": null, "ocrText": "x", "questionTypes": {"trueFalse": true, "shortAnswer": null}}"#,
        )
        .unwrap();

        assert!(!request.has_images());
        assert_eq!(request.raw_text(), Some("x"));
        assert!(request.question_types.is_requested(QuestionKind::TrueFalse));
        assert!(!request.question_types.is_requested(QuestionKind::ShortAnswer));

        let request: GenerateQuestionsRequest =
            serde_json::from_str(r#"{"ocrText": "x", "questionTypes": null, "counts": null}"#).unwrap();
        assert!(!request.question_types.any());
        assert_eq!(request.counts.count_for(QuestionKind::TrueFalse), 5);
    }
}
