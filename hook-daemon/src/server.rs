//! Serving the API until shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use hook_license::LicenseService;
use tokio::net::UnixListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;
use tracing::{info, warn};

use crate::build_router;

/// Serves the license API on `listener` until `shutdown` resolves.
///
/// After shutdown, in-flight requests get at most `drain_timeout` to finish
/// before the server is dropped.
pub async fn serve<F>(
    listener: UnixListener,
    service: Arc<LicenseService>,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let app = build_router(service);
    let stop = Arc::new(Notify::new());

    let mut server = tokio::spawn({
        let stop = Arc::clone(&stop);
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.notified().await })
                .await
        }
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("HTTP server task failed")?.context("HTTP server failed")?;
            return Ok(());
        }
        () = shutdown => {}
    }

    info!("Shutting down, draining for at most {:?}", drain_timeout);
    stop.notify_one();

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(joined) => joined
            .context("HTTP server task failed")?
            .context("HTTP server failed")?,
        Err(_) => {
            warn!("Drain timed out, closing open connections");
            server.abort();
        }
    }
    Ok(())
}

/// Resolves on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        () = interrupt => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}
