// src/documents.rs
//! Résumé text extraction for the two accepted upload formats.

use crate::error::AnalysisError;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::info;

const DOCX_MIME: &str = "vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the upload format from its declared content type, falling
    /// back to the filename extension when the client sent no type at all.
    /// A declared type that is neither PDF nor DOCX is rejected outright.
    pub fn detect(
        content_type: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Self, AnalysisError> {
        match content_type {
            Some(ct) if ct.contains("application/pdf") => return Ok(DocumentKind::Pdf),
            Some(ct) if ct.contains(DOCX_MIME) => return Ok(DocumentKind::Docx),
            Some(_) => {
                return Err(AnalysisError::InvalidInput(
                    "Unsupported file format. Please upload a PDF or DOCX file.".to_string(),
                ))
            }
            None => {}
        }

        match filename.map(str::to_lowercase) {
            Some(name) if name.ends_with(".pdf") => Ok(DocumentKind::Pdf),
            Some(name) if name.ends_with(".docx") => Ok(DocumentKind::Docx),
            _ => Err(AnalysisError::InvalidInput(
                "Unsupported file format. Please upload a PDF or DOCX file.".to_string(),
            )),
        }
    }
}

/// Extracts plain text from an uploaded résumé.
pub fn extract_resume_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AnalysisError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
        DocumentKind::Docx => extract_docx_text(bytes)?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "The resume contains no extractable text.".to_string(),
        ));
    }

    info!("Extracted {} chars of resume text", text.len());
    Ok(text)
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        AnalysisError::InvalidInput(format!("Failed to extract text from the PDF: {}", e))
    })
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        AnalysisError::InvalidInput(format!("Failed to read the DOCX document: {:?}", e))
    })?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}
