//! HTTP listener lifecycle.

use std::sync::Arc;

use anyhow::Result;
use kinship_graph::FamilyStore;

use crate::routes::{router, AppState};

/// Serve the API on `bind_addr` until Ctrl-C, then release the store.
pub async fn serve(
    bind_addr: &str,
    cors_origins: &[String],
    store: Arc<dyn FamilyStore>,
) -> Result<()> {
    let app = router(AppState::new(store), cors_origins);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Kinship API listening at http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last handle to the store; dropping it closes the pool.
    tracing::info!("Server stopped, graph connections released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
