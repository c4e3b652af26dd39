// src/llm/response.rs
//! Best-effort normalization of free-form model output into a JSON object.

use crate::error::AnalysisError;
use serde_json::{Map, Value};

const SNIPPET_CHARS: usize = 200;

/// Truncates raw model output for inclusion in error messages.
pub fn snippet(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= SNIPPET_CHARS {
        trimmed.to_string()
    } else {
        let mut out: String = trimmed.chars().take(SNIPPET_CHARS).collect();
        out.push_str("...");
        out
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// Models wrap JSON in fences despite being told not to.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped.trim().strip_suffix("```").unwrap_or(stripped).trim()
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped.trim().strip_suffix("```").unwrap_or(stripped).trim()
    } else {
        text
    }
}

/// Parses model output as a JSON object. A JSON array containing exactly one
/// object is unwrapped to that object; any other shape is an error carrying a
/// truncated snippet of the raw text for diagnosis.
pub fn parse_object(raw: &str) -> Result<Map<String, Value>, AnalysisError> {
    let cleaned = strip_json_fences(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        AnalysisError::MalformedOutput(format!(
            "Failed to parse JSON from model output: {}. Raw response snippet: {}",
            e,
            snippet(raw)
        ))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Array(mut items) => {
            if items.len() == 1 {
                if let Value::Object(map) = items.remove(0) {
                    return Ok(map);
                }
            }
            Err(AnalysisError::MalformedOutput(format!(
                "Unexpected shape from model: expected a JSON object, got an array. Raw response snippet: {}",
                snippet(raw)
            )))
        }
        other => Err(AnalysisError::MalformedOutput(format!(
            "Unexpected shape from model: expected a JSON object, got {}. Raw response snippet: {}",
            type_name(&other),
            snippet(raw)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_object_fenced() {
        let raw = "```json\n{\"role\": \"Engineer\"}\n```";
        let map = parse_object(raw).unwrap();
        assert_eq!(map.get("role").unwrap(), "Engineer");
    }

    #[test]
    fn test_parse_object_unwraps_single_element_array() {
        let raw = "[{\"role\": \"Engineer\"}]";
        let map = parse_object(raw).unwrap();
        assert_eq!(map.get("role").unwrap(), "Engineer");
    }

    #[test]
    fn test_parse_object_rejects_multi_element_array() {
        let raw = "[{\"a\": 1}, {\"b\": 2}]";
        let err = parse_object(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedOutput(_)));
    }

    #[test]
    fn test_parse_object_rejects_scalar() {
        let err = parse_object("42").unwrap_err();
        match err {
            AnalysisError::MalformedOutput(msg) => assert!(msg.contains("a number")),
            other => panic!("expected MalformedOutput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_object_invalid_json_includes_snippet() {
        let err = parse_object("this is not json at all").unwrap_err();
        match err {
            AnalysisError::MalformedOutput(msg) => {
                assert!(msg.contains("this is not json"));
            }
            other => panic!("expected MalformedOutput, got {:?}", other),
        }
    }

    #[test]
    fn test_snippet_truncates_long_output() {
        let long = "x".repeat(500);
        let s = snippet(&long);
        assert_eq!(s.chars().count(), 203);
        assert!(s.ends_with("..."));
    }
}
