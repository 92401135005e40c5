//! Quiz relay server binary
//!
//! Run with: cargo run -p quiz-relay --bin quiz-relay-server

use clap::Parser;
use quiz_relay::{config::RelayConfig, server::RelayServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "quiz-relay-server", version, about = "Quiz question relay for Ollama")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "QUIZ_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host (overrides config and HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Ollama base URL (overrides config and OLLAMA_API)
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quiz_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = RelayConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Ollama: {}", config.backend.base_url);
    tracing::info!("  - Vision model: {}", config.backend.vision_model);
    tracing::info!("  - Text model: {}", config.backend.text_model);

    let server = RelayServer::new(config)?;

    // Check Ollama
    match server.state().backend().health_check().await {
        Ok(()) => tracing::info!("Ollama is running"),
        Err(e) => {
            tracing::warn!("Ollama not available: {}", e);
            tracing::warn!("Please start Ollama:");
            tracing::warn!("  1. Install: https://ollama.com");
            tracing::warn!("  2. Start: ollama serve");
            tracing::warn!("  3. Pull models: ollama pull llava:7b && ollama pull gemma3:4b");
        }
    }

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /generate-questions - Generate questions from images or text");
    println!("  GET  /models             - List backend models");
    println!("  GET  /info               - Service info and endpoint list");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
