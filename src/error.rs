// src/error.rs
//! Error taxonomy for the analysis pipeline, mapped to HTTP statuses at the
//! web boundary.

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to load or scrape the URL: {0}")]
    Fetch(String),

    #[error("LLM request failed: {0}")]
    Upstream(String),

    #[error("{0}")]
    MalformedOutput(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl AnalysisError {
    pub fn status(&self) -> Status {
        match self {
            AnalysisError::InvalidInput(_) => Status::BadRequest,
            AnalysisError::Fetch(_) => Status::BadRequest,
            AnalysisError::Upstream(_) => Status::ServiceUnavailable,
            AnalysisError::MalformedOutput(_) => Status::InternalServerError,
            AnalysisError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput(_) => "INVALID_INPUT",
            AnalysisError::Fetch(_) => "FETCH_FAILED",
            AnalysisError::Upstream(_) => "LLM_UNAVAILABLE",
            AnalysisError::MalformedOutput(_) => "MALFORMED_MODEL_OUTPUT",
            AnalysisError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AnalysisError::InvalidInput(_) => vec![
                "Check the form fields and file types".to_string(),
                "Upload a PDF or DOCX resume, or a CSV portfolio".to_string(),
            ],
            AnalysisError::Fetch(_) => vec![
                "Verify the job posting URL is reachable".to_string(),
                "Try a direct link to the job description page".to_string(),
            ],
            AnalysisError::Upstream(_) => vec![
                "Try again in a few moments".to_string(),
                "Select a different model".to_string(),
            ],
            AnalysisError::MalformedOutput(_) => vec![
                "Retry the analysis".to_string(),
                "Select a different model".to_string(),
            ],
            AnalysisError::Internal(_) => vec![
                "Try again in a few moments".to_string(),
                "Contact support if the problem persists".to_string(),
            ],
        }
    }
}

impl<'r> Responder<'r, 'static> for AnalysisError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        tracing::error!("Request failed ({}): {}", status.code, self);

        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
            error_code: self.error_code().to_string(),
            suggestions: self.suggestions(),
        });

        (status, body).respond_to(request)
    }
}
