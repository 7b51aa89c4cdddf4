//! Donghwa Server - Illustrated storybook generation over HTTP.
//!
//! Accepts a story topic, generates an eight-page storybook with the Gemini
//! text model, illustrates each page with the Gemini image model, and
//! renders the result as HTML.

use clap::Parser;
use donghwa_models::{GeminiConfig, GeminiImageClient, GeminiTextClient};
use donghwa_server::{AppState, create_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the storybook server.
#[derive(Parser, Debug)]
#[command(name = "donghwa-server")]
#[command(about = "Donghwa Server - Illustrated storybook generation")]
#[command(version)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(short, long, env = "DONGHWA_ADDRESS", default_value = "0.0.0.0:8000")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = GeminiConfig::from_env()?;
    let teller = GeminiTextClient::new(config.clone())?;
    let illustrator = GeminiImageClient::new(config)?;

    let state = AppState::new(Arc::new(teller), Arc::new(illustrator));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    info!(address = %args.address, "Donghwa server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
