//! Recovery of the question array from untrusted model output
//!
//! Models asked for "ONLY the JSON array" still wrap it in prose or
//! markdown fences. Recovery takes the widest `[` ... `]` span, parses it,
//! and falls back to the whole text. Unparseable output is an error that
//! carries the raw text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{GeneratedQuestion, QuestionDiagnostic, QuestionKind};

use super::plan::QuestionPlan;

/// Greedy: first `[` to last `]`
static RE_JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Questions kept after filtering, plus what was dropped for being invalid
#[derive(Debug, Clone, Default)]
pub struct RecoveredQuestions {
    pub questions: Vec<GeneratedQuestion>,
    pub skipped: Vec<QuestionDiagnostic>,
    /// Elements in the parsed array before filtering
    pub parsed_count: usize,
}

/// Parse raw output and keep only valid questions of the planned kinds
pub fn recover_questions(raw: &str, plan: &QuestionPlan) -> Result<RecoveredQuestions> {
    let items = parse_question_array(raw)?;
    Ok(filter_questions(items, plan))
}

/// Extract and parse the JSON array in `raw`
pub fn parse_question_array(raw: &str) -> Result<Vec<Value>> {
    let parsed = match RE_JSON_ARRAY.find(raw) {
        Some(span) => serde_json::from_str::<Value>(span.as_str())
            .or_else(|span_err| serde_json::from_str::<Value>(raw).map_err(|_| span_err)),
        None => serde_json::from_str::<Value>(raw),
    };

    match parsed {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(Error::malformed(
            raw,
            format!("expected a JSON array, got {}", json_kind(&other)),
        )),
        Err(e) => {
            tracing::error!("Failed to parse JSON response: {}", e);
            tracing::debug!("Raw response: {}", raw);
            Err(Error::malformed(raw, e.to_string()))
        }
    }
}

/// Keep elements whose `type` is planned, in order, validating each variant
pub fn filter_questions(items: Vec<Value>, plan: &QuestionPlan) -> RecoveredQuestions {
    let parsed_count = items.len();
    let declared: Vec<String> = items
        .iter()
        .map(|item| match item.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => other.to_string(),
            None => "<missing>".to_string(),
        })
        .collect();

    let mut recovered = RecoveredQuestions {
        parsed_count,
        ..Default::default()
    };

    for (index, item) in items.into_iter().enumerate() {
        let kind = item
            .get("type")
            .and_then(Value::as_str)
            .and_then(QuestionKind::from_identifier);

        let Some(kind) = kind.filter(|kind| plan.allows(*kind)) else {
            continue;
        };

        match serde_json::from_value::<GeneratedQuestion>(item) {
            Ok(question) => recovered.questions.push(question),
            Err(e) => {
                tracing::warn!("Dropping invalid {} question at index {}: {}", kind, index, e);
                recovered.skipped.push(QuestionDiagnostic {
                    index,
                    kind,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Generated {} questions, filtered to {} matching requested types",
        parsed_count,
        recovered.questions.len()
    );

    if recovered.questions.is_empty() && parsed_count > 0 {
        let requested: Vec<&str> = plan.allowed_types().iter().map(|k| k.as_str()).collect();
        tracing::warn!(
            "Model produced questions but none match requested types. Requested: {:?}, Got: {:?}",
            requested,
            declared
        );
    }

    recovered
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
