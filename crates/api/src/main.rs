//! Zeitlog - personal time tracking server
//!
//! Main entry point: config, context, alarm scheduler, HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zeitlog_app::{router, AppContext};
use zeitlog_domain::{Result, ZeitlogError};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = zeitlog_infra::load_config()?;
    let listen_addr = config.server.listen_addr.clone();

    let ctx = Arc::new(AppContext::new_with_config(config).await?);
    ctx.start_scheduler().await?;

    let listener = TcpListener::bind(&listen_addr)
        .await
        .map_err(|err| ZeitlogError::Internal(format!("cannot bind {listen_addr}: {err}")))?;
    info!(addr = %listen_addr, "zeitlog listening");

    let app = router(Arc::clone(&ctx));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| ZeitlogError::Internal(format!("server error: {err}")))?;

    ctx.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
