//! Liveness endpoint for the hosting platform. Independent of bot state.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

/// GET / and GET /health: 200 with body "OK".
pub async fn health() -> &'static str {
    "OK"
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

/// Binds `addr` and returns the listener with its actual address (port 0 picks a free port).
pub async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "Failed to bind health endpoint");
        anyhow::anyhow!("Failed to bind health endpoint on {}: {}", addr, e)
    })?;
    let local = listener.local_addr()?;
    Ok((listener, local))
}

/// Serves the health router until the task is dropped or the server fails.
pub async fn serve(listener: TcpListener) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(addr = %addr, "Health endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Binds and spawns the health server on its own task.
pub async fn spawn(addr: SocketAddr) -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let (listener, local) = bind(addr).await?;
    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener).await {
            error!(error = %e, "Health endpoint stopped");
        }
    });
    Ok((local, handle))
}
