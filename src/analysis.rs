// src/analysis.rs
//! Normalization of the model's suitability verdict into a stable shape.
//!
//! The model is asked for a fixed JSON schema but regularly under-delivers:
//! keys go missing, lists come back as newline-separated strings, and
//! question entries arrive as flat strings instead of Question/Answer pairs.
//! Everything here is defensive coercion so the renderer never sees a
//! surprise.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub suitability: String,
    pub skill_match_percentage: String,
    pub matched_skills: Vec<String>,
    pub interview_questions: Vec<QuestionAnswer>,
    pub behavioral_questions: Vec<String>,
    pub unsuitability_reasons: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    /// Builds a report from the parsed model output. Missing keys default to
    /// "N/A" or empty lists so both suitability branches always render.
    pub fn from_value(map: &Map<String, Value>) -> Self {
        let suitability = map
            .get("Suitability")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();

        let skill_match_percentage = match map.get("Skill Match Percentage") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => "N/A".to_string(),
        };

        Self {
            suitability,
            skill_match_percentage,
            matched_skills: ensure_list(map.get("Matched Skills")),
            interview_questions: ensure_question_list(map.get("Interview Questions")),
            behavioral_questions: ensure_list(map.get("Behavioral Questions")),
            unsuitability_reasons: ensure_list(map.get("Reasons for Unsuitability")),
            suggestions: ensure_list(map.get("Suggestions")),
        }
    }

    pub fn is_suitable(&self) -> bool {
        self.suitability.eq_ignore_ascii_case("yes")
    }
}

/// Coerces a value into a list of strings. A bare string is split on
/// newlines with common list prefixes ("1. ", "- ", "* ") stripped.
pub fn ensure_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::String(_) => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(text)) => text
            .lines()
            .map(strip_list_prefix)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn strip_list_prefix(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return rest.trim_start();
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    line
}

/// Coerces a value into Question/Answer pairs. Accepts a list of objects
/// with "Question"/"Answer" keys, or a list of strings in "Q: ... A: ..."
/// form with "N/A" filled in for whatever cannot be recovered.
fn ensure_question_list(value: Option<&Value>) -> Vec<QuestionAnswer> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(entry) => Some(QuestionAnswer {
                question: entry
                    .get("Question")
                    .and_then(Value::as_str)
                    .unwrap_or("N/A")
                    .to_string(),
                answer: entry
                    .get("Answer")
                    .and_then(Value::as_str)
                    .unwrap_or("N/A")
                    .to_string(),
            }),
            Value::String(text) => Some(split_question_string(text)),
            _ => None,
        })
        .collect()
}

fn split_question_string(text: &str) -> QuestionAnswer {
    for (answer_tag, question_tag) in [("Answer:", "Question:"), ("A:", "Q:")] {
        if let Some((question_part, answer_part)) = text.split_once(answer_tag) {
            return QuestionAnswer {
                question: question_part.replace(question_tag, "").trim().to_string(),
                answer: answer_part.trim().to_string(),
            };
        }
    }
    QuestionAnswer {
        question: text.trim().to_string(),
        answer: "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_ensure_list_passes_arrays_through() {
        let value = json!(["Rust", "SQL"]);
        assert_eq!(ensure_list(Some(&value)), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_ensure_list_splits_newline_string() {
        let value = json!("1. Learn Rust\n- Practice SQL\n* Build projects\n\nShip something");
        assert_eq!(
            ensure_list(Some(&value)),
            vec![
                "Learn Rust",
                "Practice SQL",
                "Build projects",
                "Ship something"
            ]
        );
    }

    #[test]
    fn test_ensure_list_missing_is_empty() {
        assert!(ensure_list(None).is_empty());
        assert!(ensure_list(Some(&json!(42))).is_empty());
    }

    #[test]
    fn test_question_list_from_objects() {
        let value = json!([{"Question": "What is ownership?", "Answer": "Move semantics."}]);
        let questions = ensure_question_list(Some(&value));
        assert_eq!(questions[0].question, "What is ownership?");
        assert_eq!(questions[0].answer, "Move semantics.");
    }

    #[test]
    fn test_question_list_from_strings() {
        let value = json!(["Q: What is a trait? A: An interface-like abstraction."]);
        let questions = ensure_question_list(Some(&value));
        assert_eq!(questions[0].question, "What is a trait?");
        assert_eq!(questions[0].answer, "An interface-like abstraction.");
    }

    #[test]
    fn test_question_list_string_without_answer() {
        let value = json!(["Describe your last project."]);
        let questions = ensure_question_list(Some(&value));
        assert_eq!(questions[0].question, "Describe your last project.");
        assert_eq!(questions[0].answer, "N/A");
    }

    #[test]
    fn test_report_defaults_for_missing_keys() {
        let report = AnalysisReport::from_value(&as_map(json!({})));
        assert_eq!(report.suitability, "N/A");
        assert_eq!(report.skill_match_percentage, "N/A");
        assert!(report.matched_skills.is_empty());
        assert!(report.interview_questions.is_empty());
        assert!(!report.is_suitable());
    }

    #[test]
    fn test_report_numeric_and_string_percentage() {
        let report = AnalysisReport::from_value(&as_map(json!({
            "Suitability": "Yes",
            "Skill Match Percentage": 85,
        })));
        assert_eq!(report.skill_match_percentage, "85");
        assert!(report.is_suitable());

        let report = AnalysisReport::from_value(&as_map(json!({
            "Skill Match Percentage": "72",
        })));
        assert_eq!(report.skill_match_percentage, "72");
    }
}
