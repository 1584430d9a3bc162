//! cmcexporter
//!
//! - `GET /metrics`: scrape the ranking page and answer in Prometheus text format
//! - Config: first CLI argument, else `cmcexporter.yaml`, else built-in defaults
//! - Logging: `RUST_LOG` (default `info`)

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cmcexporter_core::error::{ExporterError, Result};
use cmcexporter_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path)?,
        None if Path::new(config::DEFAULT_CONFIG_PATH).exists() => {
            config::load_from_file(config::DEFAULT_CONFIG_PATH)?
        }
        None => {
            tracing::info!("no config file given, using built-in defaults");
            config::ExporterConfig::default()
        }
    };
    let listen = cfg.exporter.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(
        %listen,
        source = %state.exporter().extractor().location(),
        "cmcexporter starting"
    );
    tracing::info!("visit http://{listen}/metrics to view the metrics");

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
