//! Unix socket binding and cleanup.

use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tokio::net::UnixListener;
use tracing::{info, warn};

/// Socket path the client libraries connect to.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/hiphops.sock";

/// Removes the socket file when dropped.
#[derive(Debug)]
pub struct SocketGuard {
    path: PathBuf,
}

impl SocketGuard {
    /// Returns the guarded path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SocketGuard {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!("Removed socket {:?}", self.path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove socket {:?}: {}", self.path, e),
        }
    }
}

/// Binds a Unix listener at `path`, replacing a stale socket left by a previous run.
///
/// Refuses to touch an existing path that is not a socket. Must be called
/// from within a Tokio runtime.
pub fn bind_socket(path: &Path) -> Result<(UnixListener, SocketGuard)> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_socket() => {
            warn!("Removing stale socket {:?}", path);
            std::fs::remove_file(path)
                .with_context(|| format!("Failed to remove stale socket {path:?}"))?;
        }
        Ok(_) => bail!("{path:?} exists and is not a socket"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e).with_context(|| format!("Failed to inspect {path:?}")),
    }

    let listener =
        UnixListener::bind(path).with_context(|| format!("Failed to bind socket {path:?}"))?;
    let guard = SocketGuard {
        path: path.to_path_buf(),
    };
    Ok((listener, guard))
}
