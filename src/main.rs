//! EmoTrack Relay - stabilizer chat gateway
//!
//! Forwards client conversations to the Google Generative Language API.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use emotrack_relay::{config::ServerConfig, server, RelayConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let relay_config = RelayConfig::from_env();
    if let Err(e) = relay_config.validate() {
        error!("Invalid relay configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let server_config = ServerConfig::from_env();

    match server::run_server(server_config, relay_config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
