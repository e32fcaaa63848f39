use std::sync::Arc;

use anyhow::{Context, Result};
use objscope_core::ServiceConfig;
use objscope_http::{AppState, create_router};

use super::open_store;

pub(crate) async fn run(config: ServiceConfig) -> Result<()> {
    let storage = open_store(&config).await?;

    let state = Arc::new(AppState::new(Arc::new(storage.clone())));
    let router = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    storage.close().await;
    Ok(())
}

/// Resolves on SIGINT or SIGTERM. A handler that cannot be installed
/// never resolves, leaving the other one in charge.
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
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
