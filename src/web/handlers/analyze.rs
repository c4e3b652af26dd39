// src/web/handlers/analyze.rs
//! The analysis pipeline: validate → fetch → extract job → extract
//! candidate material → analyze → render. One request, fully sequential,
//! no retries; the first failure is surfaced to the caller.

use crate::config::LlmConfig;
use crate::documents::{self, DocumentKind};
use crate::error::AnalysisError;
use crate::job_posting::{self, page_fetcher};
use crate::llm::{self, LlmClient};
use crate::web::types::AnalyzeUpload;
use crate::{analysis::AnalysisReport, llm::response, portfolio, prompts, render};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::info;
use uuid::Uuid;

pub async fn analyze_handler(
    mut upload: Form<AnalyzeUpload<'_>>,
    config: &State<LlmConfig>,
) -> Result<RawHtml<String>, AnalysisError> {
    llm::validate_model(&upload.model_choice)?;

    if upload.url.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Please provide a job posting URL.".to_string(),
        ));
    }

    let use_both = upload
        .use_both
        .as_deref()
        .map_or(false, |v| v.trim().eq_ignore_ascii_case("true"));
    let has_resume = has_upload(upload.resume_file.as_ref());
    let has_portfolio = has_upload(upload.portfolio_file.as_ref());

    validate_file_combination(use_both, has_resume, has_portfolio)?;

    info!(
        "Starting analysis: model={}, use_both={}, resume={}, portfolio={}",
        upload.model_choice, use_both, has_resume, has_portfolio
    );

    let client = LlmClient::new(config.inner().clone(), &upload.model_choice)?;

    let page_text = page_fetcher::fetch_page_text(upload.url.trim()).await?;
    let job = job_posting::extract_job_posting(&client, &page_text).await?;

    // Resume takes precedence when both files arrive without `use_both`.
    let resume_text = if use_both || has_resume {
        let file = upload
            .resume_file
            .as_mut()
            .expect("resume presence checked above");
        let kind = detect_kind(file)?;
        let bytes = read_upload(file, "resume").await?;
        Some(documents::extract_resume_text(kind, &bytes)?)
    } else {
        None
    };

    let skills = if use_both || (has_portfolio && !has_resume) {
        let file = upload
            .portfolio_file
            .as_mut()
            .expect("portfolio presence checked above");
        let bytes = read_upload(file, "portfolio").await?;
        Some(portfolio::load_skills(&bytes)?)
    } else {
        None
    };

    let prompt = match (&resume_text, &skills) {
        (Some(resume), Some(portfolio_skills)) => {
            prompts::combined_analysis_prompt(&job, resume, portfolio_skills)
        }
        (Some(resume), None) => prompts::resume_analysis_prompt(&job, resume),
        (None, Some(portfolio_skills)) => prompts::portfolio_analysis_prompt(&job, portfolio_skills),
        (None, None) => {
            return Err(AnalysisError::InvalidInput(
                "No valid file provided for analysis.".to_string(),
            ))
        }
    };

    let raw = client.complete(&prompt).await?;
    let parsed = response::parse_object(&raw)?;
    let report = AnalysisReport::from_value(&parsed);

    info!(
        "Analysis complete: suitability={}, match={}%",
        report.suitability, report.skill_match_percentage
    );

    let fragment = render::render_fragment(&report, &job);
    Ok(RawHtml(format!("<div>{}</div>", fragment)))
}

fn has_upload(file: Option<&TempFile<'_>>) -> bool {
    file.map_or(false, |f| f.len() > 0)
}

pub(crate) fn validate_file_combination(
    use_both: bool,
    has_resume: bool,
    has_portfolio: bool,
) -> Result<(), AnalysisError> {
    if use_both {
        if !(has_resume && has_portfolio) {
            return Err(AnalysisError::InvalidInput(
                "Both resume and portfolio files are required when 'Analyze Both' is selected."
                    .to_string(),
            ));
        }
    } else if !(has_resume || has_portfolio) {
        return Err(AnalysisError::InvalidInput(
            "Please provide either a Resume or Portfolio file.".to_string(),
        ));
    }
    Ok(())
}

fn detect_kind(file: &TempFile<'_>) -> Result<DocumentKind, AnalysisError> {
    let content_type = file.content_type().map(|ct| ct.to_string());
    let filename = file.raw_name().and_then(|n| n.as_str().map(str::to_string));
    DocumentKind::detect(content_type.as_deref(), filename.as_deref())
}

/// Spools an upload to a uuid-named temp path and reads it back as bytes.
async fn read_upload(file: &mut TempFile<'_>, label: &str) -> Result<Vec<u8>, AnalysisError> {
    let temp_path = std::env::temp_dir().join(format!("careerlens_{}_{}", label, Uuid::new_v4()));

    file.persist_to(&temp_path).await.map_err(|e| {
        AnalysisError::Internal(anyhow::anyhow!("Failed to store uploaded file: {}", e))
    })?;

    let bytes = tokio::fs::read(&temp_path).await.map_err(|e| {
        AnalysisError::Internal(anyhow::anyhow!("Failed to read uploaded file: {}", e))
    });

    let _ = tokio::fs::remove_file(&temp_path).await;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_both_requires_both_files() {
        assert!(validate_file_combination(true, true, true).is_ok());
        assert!(matches!(
            validate_file_combination(true, true, false),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_file_combination(true, false, true),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_mode_requires_at_least_one_file() {
        assert!(validate_file_combination(false, true, false).is_ok());
        assert!(validate_file_combination(false, false, true).is_ok());
        assert!(matches!(
            validate_file_combination(false, false, false),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}
