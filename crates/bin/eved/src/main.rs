//! # eved: Eve guardian dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct the hyper-backed home API client (adapter)
//! - Construct and mount the dashboard, injecting the client via the port trait
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGTERM/SIGINT), tearing the dashboard down
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use eve_adapter_http_axum::router;
use eve_adapter_http_axum::state::AppState;
use eve_adapter_http_hyper::HyperHomeApi;
use eve_app::services::dashboard::Dashboard;
use eve_domain::time::DisplayZone;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Home API client
    let api = HyperHomeApi::new(&config.upstream);
    tracing::info!(base_url = api.base_url(), "home API client configured");

    // Dashboard
    let dashboard = Arc::new(Dashboard::new(api, config.dashboard.person.clone()));
    dashboard.mount().await;

    // HTTP
    let state = AppState::new(
        Arc::clone(&dashboard),
        DisplayZone::Local,
        config.dashboard.refresh_seconds,
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "eved listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    dashboard.teardown().await;
    tracing::info!("eved stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
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
