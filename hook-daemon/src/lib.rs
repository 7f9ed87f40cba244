//! HTTP API and socket plumbing for the hook licensing daemon.

mod server;
mod socket;

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use hook_license::{LicenseInfo, LicenseService};

pub use server::{serve, shutdown_signal};
pub use socket::{bind_socket, SocketGuard, DEFAULT_SOCKET_PATH};

async fn license_handler(State(service): State<Arc<LicenseService>>) -> Json<LicenseInfo> {
    Json((*service.get_license_info(false)).clone())
}

/// Build the HTTP API router around the given license service.
pub fn build_router(service: Arc<LicenseService>) -> Router {
    Router::new()
        .route("/license", get(license_handler))
        .with_state(service)
}
