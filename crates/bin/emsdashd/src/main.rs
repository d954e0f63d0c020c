//! # emsdashd: EMS dashboard daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`emsdash.toml`, environment overrides)
//! - Initialise `tracing` with the configured filter
//! - Construct the virtual EMS bus and the bus service
//! - Build the axum router serving the REST API and the dashboard assets
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::path::Path;

use anyhow::Context;
use emsdash_adapter_http_axum::state::AppState;
use emsdash_adapter_virtual::VirtualBus;
use emsdash_app::services::bus_service::BusService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Bus
    let bus = VirtualBus::new(config.scan_delay()).context("seeding the virtual bus")?;
    let bus_service = BusService::new(bus);

    // HTTP
    let mut state = AppState::new(bus_service, config.viewer());
    let assets = Path::new(&config.dashboard.assets_dir);
    if assets.is_dir() {
        state = state.with_assets(assets);
    } else {
        tracing::warn!(
            path = %assets.display(),
            "dashboard assets not found, serving the API only"
        );
    }
    let app = emsdash_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "emsdashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("emsdashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
