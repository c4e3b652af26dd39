// src/job_posting/mod.rs
use crate::analysis::ensure_list;
use crate::error::AnalysisError;
use crate::llm::{response, LlmClient};
use crate::prompts;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

pub mod page_fetcher;

/// Structured job requirements extracted by the model from scraped page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    pub skills: Vec<String>,
    pub description: String,
}

impl JobPosting {
    /// Builds a posting from the parsed model output. The prompt asks for a
    /// skills list but some models return a comma-free string; both shapes
    /// are accepted. Missing fields get display defaults.
    pub fn from_value(map: &Map<String, Value>) -> Self {
        let role = non_empty_string(map.get("role")).unwrap_or_else(|| "Not specified".to_string());
        let description =
            non_empty_string(map.get("description")).unwrap_or_else(|| "Not specified".to_string());

        Self {
            role,
            skills: ensure_list(map.get("skills")),
            description,
        }
    }

    pub fn skills_joined(&self) -> String {
        if self.skills.is_empty() {
            "Not specified".to_string()
        } else {
            self.skills.join(", ")
        }
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Asks the model to extract role, skills and description from scraped page
/// text.
pub async fn extract_job_posting(
    client: &LlmClient,
    page_text: &str,
) -> Result<JobPosting, AnalysisError> {
    let prompt = prompts::job_extraction_prompt(page_text);
    let raw = client.complete(&prompt).await?;
    let map = response::parse_object(&raw)?;

    let posting = JobPosting::from_value(&map);
    info!(
        "Extracted job posting: {} ({} skills)",
        posting.role,
        posting.skills.len()
    );
    Ok(posting)
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
    fn test_from_value_complete() {
        let map = as_map(json!({
            "role": "Backend Engineer",
            "skills": ["Rust", "PostgreSQL"],
            "description": "Build services."
        }));
        let posting = JobPosting::from_value(&map);
        assert_eq!(posting.role, "Backend Engineer");
        assert_eq!(posting.skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(posting.skills_joined(), "Rust, PostgreSQL");
    }

    #[test]
    fn test_from_value_skills_as_string() {
        let map = as_map(json!({
            "role": "Data Analyst",
            "skills": "SQL\nPython",
            "description": "Analyze data."
        }));
        let posting = JobPosting::from_value(&map);
        assert_eq!(posting.skills, vec!["SQL", "Python"]);
    }

    #[test]
    fn test_from_value_defaults() {
        let posting = JobPosting::from_value(&as_map(json!({})));
        assert_eq!(posting.role, "Not specified");
        assert_eq!(posting.description, "Not specified");
        assert_eq!(posting.skills_joined(), "Not specified");
    }
}
