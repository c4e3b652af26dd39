use anyhow::Result;
use career_consultant::{start_web_server, LlmConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("career_consultant=info,rocket=warn")),
        )
        .init();

    let port = match std::env::var("ROCKET_PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
        Err(_) => 8000,
    };

    let config = LlmConfig::from_env()?;

    tracing::info!("Starting AI Career Consultant API");
    tracing::info!("LLM API: {}", config.base_url);
    tracing::info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config, port).await
}
