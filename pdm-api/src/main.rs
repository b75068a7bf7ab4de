//! pdm-api - Development-plan metrics service entry point
//!
//! Fetches the municipality's published sheet exports, maps them into
//! canonical product goals, and serves fiscal and physical execution
//! metrics over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdm_api::config::{Args, Config};
use pdm_api::services::{GoalService, SecretariatService, SheetClient, SheetSource};
use pdm_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdm_api=debug,pdm_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments and resolve configuration
    let args = Args::parse();
    let config = Config::resolve(&args).context("Failed to resolve configuration")?;

    info!("Starting pdm-api v{}", env!("CARGO_PKG_VERSION"));
    info!("Goals sheet: {}", config.goals_sheet_url);
    match &config.secretariats_sheet_url {
        Some(url) => info!("Secretariats sheet: {}", url),
        None => info!("Secretariats sheet: not configured"),
    }
    info!("Cache TTL: {}s", config.cache_ttl.as_secs());

    // Wire the sheet clients into the cached services
    let goals_client =
        SheetClient::new(&config.goals_sheet_url).context("Failed to create goals sheet client")?;
    let goals = GoalService::new(Arc::new(goals_client), config.cache_ttl);

    let secretariats_source: Option<Arc<dyn SheetSource>> = match &config.secretariats_sheet_url {
        Some(url) => {
            let client =
                SheetClient::new(url).context("Failed to create secretariats sheet client")?;
            Some(Arc::new(client))
        }
        None => None,
    };
    let secretariats = SecretariatService::new(secretariats_source, config.cache_ttl);

    // Build the application router
    let state = AppState::new(goals, secretariats);
    let app = build_router(state, &config.cors_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
