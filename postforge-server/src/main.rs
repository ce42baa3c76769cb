//! PostForge Server - Headless Daemon
//!
//! Serves `POST /api/generate`: a quota-limited (5 per client per day)
//! proxy in front of Gemini with a fixed LinkedIn-blogger persona.
//!
//! Access via: http://localhost:3000

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

mod cli;
mod config_commands;
mod router;
mod server_utils;

use cli::{Cli, Commands};
use postforge_core::proxy::AppState;
use postforge_core::{GeminiClient, SystemClock};
use postforge_types::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.settings.into_config();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config { json } => config_commands::show_config(&config, json),
        Commands::Serve => {
            server_utils::init_logging(&cli.log_level)?;
            serve(config).await
        },
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

    info!("🚀 PostForge Server starting on {}...", config.bind_address());

    if !config.gemini.has_api_key() {
        warn!("⚠️ GEMINI_API_KEY is not set; every generation request will fail upstream");
    }

    let backend = Arc::new(GeminiClient::from_config(&config.gemini)?);
    let state = AppState::new(backend, Arc::new(SystemClock));
    let app = router::build_router(state, &config);

    let listener = server_utils::create_listener(&config).await?;

    info!("🌐 Server listening on http://{}", config.bind_address());
    info!("🔀 Generate endpoint at http://{}/api/generate", config.bind_address());
    if let Some(dir) = config.static_dir.as_deref() {
        info!("📊 Frontend served from {}", dir);
    }

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("✅ Server stopped");
    Ok(())
}
