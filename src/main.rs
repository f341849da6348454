use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use patria_admin::{app, config::Config, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let bind_addr = config.bind_addr.clone();

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "Failed to build API client");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, %bind_addr, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(%bind_addr, api = state.client.base_url(), "Running");

    if let Err(err) = axum::serve(listener, app(state)).await {
        error!(%err, "Server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
