// src/config.rs
use anyhow::{Context, Result};
use std::env;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for the hosted LLM API, read once at startup and managed as
/// server state.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("GROQ_API_KEY").context("GROQ_API_KEY environment variable not set")?;

        let base_url = env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_key,
            base_url,
            timeout_seconds: 60,
        })
    }
}
