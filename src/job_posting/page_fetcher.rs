// src/job_posting/page_fetcher.rs
use crate::error::AnalysisError;
use reqwest::Client;
use scraper::Html;
use tracing::info;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Scraped career pages can be huge; cap what goes into the prompt.
const MAX_PAGE_TEXT_CHARS: usize = 12_000;

/// Fetches a job-posting page and returns its visible text, collapsed to
/// single spaces and truncated to the prompt cap.
pub async fn fetch_page_text(url: &str) -> Result<String, AnalysisError> {
    info!("Fetching job posting page: {}", url);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| {
            AnalysisError::Internal(anyhow::anyhow!("Failed to create HTTP client: {}", e))
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AnalysisError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalysisError::Fetch(format!("HTTP error {}", status)));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AnalysisError::Fetch(format!("failed to read response body: {}", e)))?;

    let text = extract_visible_text(&html);
    if text.is_empty() {
        return Err(AnalysisError::Fetch(
            "No content found on the page after loading.".to_string(),
        ));
    }

    info!("Extracted {} chars of page text", text.len());
    Ok(truncate_chars(&text, MAX_PAGE_TEXT_CHARS))
}

/// Collects the document's text nodes, skipping script/style/noscript
/// content, and collapses all whitespace runs to single spaces.
pub(crate) fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();

    for node in document.tree.nodes() {
        if let Some(text) = node.value().as_text() {
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|e| e.name().to_string()))
                .map_or(false, |name| {
                    matches!(name.as_str(), "script" | "style" | "noscript")
                });
            if !hidden {
                raw.push_str(text);
                raw.push(' ');
            }
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_visible_text_skips_scripts() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><h1>Senior   Engineer</h1><script>var x = 1;</script>
            <p>Build
            things.</p></body></html>"#;
        let text = extract_visible_text(html);
        assert!(text.contains("Senior Engineer"));
        assert!(text.contains("Build things."));
        assert!(!text.contains("var x"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_extract_visible_text_empty_page() {
        assert_eq!(extract_visible_text("<html><body></body></html>"), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
    }
}
