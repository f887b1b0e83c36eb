//! API Server Binary Entry Point

use anyhow::Context;
use clap::Parser;
use eligify_api_server::{start_server, ApiState, ServerConfig};
use eligify_extract::{OpenAIClient, PdfiumTextExtractor};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "eligify_api_server=info,eligify_extract=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    let extractor = OpenAIClient::new(config.openai_api_key.clone())
        .with_model(config.openai_model.clone())
        .with_base_url(config.openai_base_url.clone());
    info!(model = extractor.model(), "Benefits extractor configured");

    let frontend_dir = config.resolve_frontend_dir();
    if frontend_dir.exists() {
        info!("Serving static files from: {}", frontend_dir.display());
    } else {
        warn!("Frontend directory not found: {}", frontend_dir.display());
    }

    let mut state = ApiState::new(Arc::new(extractor), frontend_dir)
        .with_max_upload_bytes(config.max_upload_bytes);

    match PdfiumTextExtractor::new() {
        Ok(pdf) => state = state.with_pdf_extractor(Arc::new(pdf)),
        Err(e) => warn!("PDF uploads disabled: {}", e),
    }

    info!("Starting Eligify API Server");
    start_server(&config.bind_addr(), state)
        .await
        .with_context(|| format!("API server on {} failed", config.bind_addr()))?;

    Ok(())
}
