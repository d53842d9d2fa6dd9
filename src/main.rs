// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use sardinai::api;
use sardinai::cli::{CliArgs, Command, Planner};
use sardinai::config::CONFIG;
use sardinai::llm;
use sardinai::services::ItineraryService;
use sardinai::state::AppState;

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

fn init_tracing(directives: &str, interactive: bool) {
    let filter = EnvFilter::new(directives);

    // The planner owns stdout, so logs go to stderr there
    if interactive {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    info!("Starting Sardin.ai API v{}", env!("CARGO_PKG_VERSION"));
    info!("Model: {}", CONFIG.gemini.model);

    let app_state = Arc::new(AppState::from_config(&CONFIG).await?);
    let app = api::router(app_state);

    let bind_address = format!(
        "{}:{}",
        host.unwrap_or_else(|| CONFIG.server.host.clone()),
        port.unwrap_or(CONFIG.server.port)
    );
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP API listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn plan(prompt_only: bool) -> Result<()> {
    let itinerary = if prompt_only {
        None
    } else {
        let provider = llm::provider_from_config(&CONFIG.gemini)?;
        Some(Arc::new(ItineraryService::new(provider)))
    };

    Planner::new(itinerary)?.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let interactive = matches!(args.command, Command::Plan { .. });
    let filter = args.log_filter(std::env::var("RUST_LOG").ok(), &CONFIG.logging.level);
    init_tracing(&filter, interactive);

    CONFIG.validate()?;

    match args.command {
        Command::Serve { host, port } => serve(host, port).await,
        Command::Plan { prompt_only } => plan(prompt_only).await,
    }
}
