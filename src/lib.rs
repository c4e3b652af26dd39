pub mod analysis;
pub mod config;
pub mod documents;
pub mod error;
pub mod job_posting;
pub mod llm;
pub mod portfolio;
pub mod prompts;
pub mod render;
pub mod web;

pub use config::LlmConfig;
pub use error::AnalysisError;
pub use web::start_web_server;
