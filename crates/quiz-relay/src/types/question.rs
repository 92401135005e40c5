//! Question kinds and the typed question variants returned to callers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The six supported question kinds, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    TrueFalse,
    FillInTheBlanks,
    MatchTheFollowing,
    ShortAnswer,
    LongAnswer,
    HigherOrderThinking,
}

impl QuestionKind {
    /// All kinds in the order they are offered, prompted and filtered
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::TrueFalse,
        QuestionKind::FillInTheBlanks,
        QuestionKind::MatchTheFollowing,
        QuestionKind::ShortAnswer,
        QuestionKind::LongAnswer,
        QuestionKind::HigherOrderThinking,
    ];

    /// Wire identifier used in the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrueFalse => "true_false",
            Self::FillInTheBlanks => "fill_in_the_blanks",
            Self::MatchTheFollowing => "match_the_following",
            Self::ShortAnswer => "short_answer",
            Self::LongAnswer => "long_answer",
            Self::HigherOrderThinking => "higher_order_thinking",
        }
    }

    /// Human-readable label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::TrueFalse => "True/False",
            Self::FillInTheBlanks => "Fill in the Blanks",
            Self::MatchTheFollowing => "Match the Following",
            Self::ShortAnswer => "Short Answer",
            Self::LongAnswer => "Long Answer",
            Self::HigherOrderThinking => "Higher Order Thinking",
        }
    }

    /// Count used when the caller does not supply one
    pub fn default_count(&self) -> u32 {
        match self {
            Self::LongAnswer | Self::HigherOrderThinking => 3,
            _ => 5,
        }
    }

    /// Look up a kind by its wire identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == identifier)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer of a true/false question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrueFalseAnswer {
    True,
    False,
}

impl TrueFalseAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
        }
    }
}

impl Serialize for TrueFalseAnswer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TrueFalseAnswer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Models emit both `"True"` and `true`
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(Self::True),
            Repr::Flag(false) => Ok(Self::False),
            Repr::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Self::True),
                "false" => Ok(Self::False),
                _ => Err(serde::de::Error::custom(format!(
                    "true_false answer must be \"True\" or \"False\", got {:?}",
                    text
                ))),
            },
        }
    }
}

/// A validated question, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedQuestion {
    TrueFalse {
        question: String,
        answer: TrueFalseAnswer,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    FillInTheBlanks {
        question: String,
        answer: String,
    },
    MatchTheFollowing {
        question: String,
        #[serde(rename = "columnA")]
        column_a: Vec<String>,
        #[serde(rename = "columnB")]
        column_b: Vec<String>,
        /// Pairing description, e.g. "1-B, 2-A, 3-C"
        answer: String,
    },
    ShortAnswer {
        question: String,
        answer: String,
    },
    LongAnswer {
        question: String,
        answer: String,
    },
    HigherOrderThinking {
        question: String,
        answer: String,
    },
}

impl GeneratedQuestion {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::TrueFalse { .. } => QuestionKind::TrueFalse,
            Self::FillInTheBlanks { .. } => QuestionKind::FillInTheBlanks,
            Self::MatchTheFollowing { .. } => QuestionKind::MatchTheFollowing,
            Self::ShortAnswer { .. } => QuestionKind::ShortAnswer,
            Self::LongAnswer { .. } => QuestionKind::LongAnswer,
            Self::HigherOrderThinking { .. } => QuestionKind::HigherOrderThinking,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            Self::TrueFalse { question, .. }
            | Self::FillInTheBlanks { question, .. }
            | Self::MatchTheFollowing { question, .. }
            | Self::ShortAnswer { question, .. }
            | Self::LongAnswer { question, .. }
            | Self::HigherOrderThinking { question, .. } => question,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifiers_match_serde_names() {
        for kind in QuestionKind::ALL {
            let encoded = serde_json::to_value(kind).unwrap();
            assert_eq!(encoded, json!(kind.as_str()));
            assert_eq!(QuestionKind::from_identifier(kind.as_str()), Some(kind));
        }
        assert_eq!(QuestionKind::from_identifier("multiple_choice"), None);
    }

    #[test]
    fn test_default_counts() {
        let counts: Vec<u32> = QuestionKind::ALL.iter().map(|k| k.default_count()).collect();
        assert_eq!(counts, vec![5, 5, 5, 5, 3, 3]);
    }

    #[test]
    fn test_match_the_following_wire_shape() {
        let question: GeneratedQuestion = serde_json::from_value(json!({
            "type": "match_the_following",
            "question": "Match the following:",
            "columnA": ["Mitochondria", "Ribosome"],
            "columnB": ["Protein synthesis", "Energy"],
            "answer": "1-B, 2-A"
        }))
        .unwrap();

        assert_eq!(question.kind(), QuestionKind::MatchTheFollowing);

        let encoded = serde_json::to_value(&question).unwrap();
        assert_eq!(encoded["type"], "match_the_following");
        assert_eq!(encoded["columnA"][0], "Mitochondria");
        assert_eq!(encoded["columnB"][1], "Energy");
    }

    #[test]
    fn test_true_false_answer_normalization() {
        let from_bool: GeneratedQuestion = serde_json::from_value(json!({
            "type": "true_false",
            "question": "Water boils at 100C at sea level.",
            "answer": true
        }))
        .unwrap();
        let encoded = serde_json::to_value(&from_bool).unwrap();
        assert_eq!(encoded["answer"], "True");
        assert!(encoded.get("explanation").is_none());

        let from_text: GeneratedQuestion = serde_json::from_value(json!({
            "type": "true_false",
            "question": "q",
            "answer": " false ",
            "explanation": "because"
        }))
        .unwrap();
        assert_eq!(
            from_text,
            GeneratedQuestion::TrueFalse {
                question: "q".into(),
                answer: TrueFalseAnswer::False,
                explanation: Some("because".into()),
            }
        );
    }

    #[test]
    fn test_true_false_rejects_other_answers() {
        let result = serde_json::from_value::<GeneratedQuestion>(json!({
            "type": "true_false",
            "question": "q",
            "answer": "Maybe"
        }));
        assert!(result.is_err());
    }
}
