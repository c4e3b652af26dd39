// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

/// Multipart form accepted by the analyze endpoint. A résumé, a portfolio,
/// or both (when `use_both` is "true") must accompany the URL.
#[derive(FromForm)]
pub struct AnalyzeUpload<'f> {
    pub url: String,
    pub resume_file: Option<TempFile<'f>>,
    pub portfolio_file: Option<TempFile<'f>>,
    pub use_both: Option<String>,
    pub model_choice: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    pub success: bool,
    pub message: String,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
