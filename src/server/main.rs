// src/server/main.rs
// Entry point for the LaymanLearn explanation server
use std::sync::Arc;

use clap::Parser;
use layman_learn::server::config::ServerConfig;
use layman_learn::server::generator::HuggingFaceGenerator;
use layman_learn::server::routes::{build_router, AppState};
use log::{info, warn};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(name = "layman-server")]
#[command(about = "Generates beginner-friendly topic explanations over HTTP")]
struct Args {
    /// Overrides SERVER_HOST
    #[arg(long)]
    host: Option<String>,

    /// Overrides SERVER_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Overrides HF_MODEL
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ServerConfig::from_env();
    layman_learn::utils::logger::init(&config.log_level);

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(model) = args.model {
        config.hf_model = model;
    }

    if config.hf_token.is_none() {
        warn!("No HF_TOKEN set; requests to {} will likely be rejected", config.hf_endpoint);
    }

    let generator = Arc::new(HuggingFaceGenerator::new(&config));
    let app = build_router(AppState::new(generator), &config.allowed_origin)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 LaymanLearn server listening on http://{}", addr);
    info!("🤖 Model: {} via {}", config.hf_model, config.hf_endpoint);
    info!("🌐 CORS origin: {}", config.allowed_origin);

    axum::serve(listener, app).await?;
    Ok(())
}
