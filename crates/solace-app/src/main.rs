//! Solace application binary - composition root.
//!
//! Ties the workspace crates together into a single executable:
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Build the responder engine (lexicon + corpus + phrase bank, once)
//! 4. Start the axum REST API server

use clap::Parser;

use solace_api::routes;
use solace_api::state::AppState;
use solace_chat::ChatEngine;
use solace_core::config::SolaceConfig;

mod cli;
use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. RUST_LOG wins; otherwise the --log-level flag, then "info".
    let default_level = args.resolve_log_level().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting Solace v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = SolaceConfig::load_or_default(&config_file);
    config.general.port = args.resolve_port(config.general.port);
    tracing::info!(path = %config_file.display(), port = config.general.port, "Configuration loaded");

    // Responder engine: corpus, lexicon, and phrase bank are built once here
    // and shared by reference across all requests.
    let engine = ChatEngine::from_config(&config);
    tracing::info!("Responder engine ready");

    let state = AppState::new(config.clone(), engine);

    routes::start_server(&config, state).await?;

    Ok(())
}
