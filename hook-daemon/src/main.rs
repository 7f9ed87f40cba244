//! hook licensing daemon
//!
//! Runs next to an application and answers one question over a Unix socket:
//! is this installation licensed, and to whom?
//!
//! Usage:
//!   LICENSE_TOKEN=<jwt> hook --socket /tmp/hiphops.sock
//!
//! `GET /license` returns the cached verification result as JSON. The token
//! is verified once at startup and the result is reused for every request.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use hook_daemon::{bind_socket, serve, shutdown_signal, DEFAULT_SOCKET_PATH};
use hook_license::{EnvTokenSource, LicenseService, TrustAnchor, DEFAULT_TOKEN_ENV};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "hook")]
#[command(about = "Local licensing daemon serving license info over a Unix socket")]
struct Args {
    /// Path of the Unix socket to listen on
    #[arg(short, long, default_value = DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Environment variable holding the license token
    #[arg(long, default_value = DEFAULT_TOKEN_ENV)]
    token_env: String,

    /// Seconds to wait for in-flight requests after a shutdown signal
    #[arg(long, default_value = "3")]
    shutdown_timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("hook starting...");
    let (listener, _socket) = bind_socket(&args.socket)?;
    info!("Listening on {:?}", args.socket);

    let service = Arc::new(LicenseService::new(
        TrustAnchor::embedded(),
        EnvTokenSource::new(args.token_env.as_str()),
    ));

    // Pre-warm the cache; a failed check is still served, not fatal
    let info = service.get_license_info(true);
    if !info.verified {
        warn!(
            "License not verified, set {} and restart to re-check",
            args.token_env
        );
    }

    serve(
        listener,
        service,
        shutdown_signal(),
        Duration::from_secs(args.shutdown_timeout_secs),
    )
    .await?;

    info!("hook stopped");
    Ok(())
}
