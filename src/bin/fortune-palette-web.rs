//! Fortune Palette Web Server Binary
//!
//! This binary starts the JSON API over the color engine and the day pillar
//! fortune.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (default 127.0.0.1:3001)
//! fortune-palette-web
//!
//! # Override the port
//! fortune-palette-web --port 8080
//! ```

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortune_palette::config::Config;
use fortune_palette::web;

/// Fortune Palette Web Server - JSON API for palettes and readings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    });

    if let Some(port) = args.port {
        config.web.port = port;
    }
    if let Some(host) = args.host {
        config.web.host = host;
    }
    config.validate()?;

    let addr = web::resolve_address(&config).await?;

    if let Ok(dir) = Config::config_dir() {
        info!("Config directory: {}", dir.display());
    }

    web::run_server(config, addr).await
}
