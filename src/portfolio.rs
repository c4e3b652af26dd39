// src/portfolio.rs
//! Portfolio loading: a CSV upload with a `Technology` column listing the
//! candidate's skills.

use crate::error::AnalysisError;
use tracing::info;

const SKILL_COLUMN: &str = "Technology";

/// Parses portfolio CSV bytes into a list of skill strings. Blank cells are
/// skipped; a missing `Technology` column is a client error.
pub fn load_skills(bytes: &[u8]) -> Result<Vec<String>, AnalysisError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers().map_err(|e| {
        AnalysisError::InvalidInput(format!("Invalid CSV file provided for portfolio: {}", e))
    })?;

    let column = headers
        .iter()
        .position(|header| header == SKILL_COLUMN)
        .ok_or_else(|| {
            AnalysisError::InvalidInput(format!(
                "CSV file must contain a '{}' column.",
                SKILL_COLUMN
            ))
        })?;

    let mut skills = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            AnalysisError::InvalidInput(format!("Invalid CSV file provided for portfolio: {}", e))
        })?;

        if let Some(value) = record.get(column) {
            let value = value.trim();
            if !value.is_empty() {
                skills.push(value.to_string());
            }
        }
    }

    info!("Loaded {} portfolio skills", skills.len());
    Ok(skills)
}
