//! Cached license verification.
//!
//! [`LicenseService`] holds at most one [`LicenseInfo`]. It is computed on the
//! first call and again whenever a caller forces a refresh; there is no expiry.
//! A failed verification is cached like any other result.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::anchor::TrustAnchor;
use crate::claims::LicenseInfo;
use crate::source::{EnvTokenSource, TokenSource};
use crate::verify::{token_fingerprint, verify};

/// Verifies the license token and memoizes the outcome.
pub struct LicenseService {
    anchor: TrustAnchor,
    source: Box<dyn TokenSource>,
    cached: RwLock<Option<Arc<LicenseInfo>>>,
}

impl LicenseService {
    /// Creates a service with an empty cache.
    pub fn new(anchor: TrustAnchor, source: impl TokenSource + 'static) -> Self {
        Self {
            anchor,
            source: Box::new(source),
            cached: RwLock::new(None),
        }
    }

    /// Creates a service using the embedded trust anchor and `LICENSE_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TrustAnchor::embedded(), EnvTokenSource::default())
    }

    /// Returns the license info, verifying only if nothing is cached or `force` is set.
    pub fn get_license_info(&self, force: bool) -> Arc<LicenseInfo> {
        if !force {
            if let Some(info) = self.cached() {
                debug!("serving cached license info");
                return info;
            }
        }
        self.refresh()
    }

    /// Returns the cached info without verifying.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<LicenseInfo>> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn refresh(&self) -> Arc<LicenseInfo> {
        let token = self.source.token();
        if !token.is_empty() {
            debug!(token = %token_fingerprint(&token), "verifying license token");
        }

        let info = Arc::new(verify(&token, &self.anchor));
        if info.verified {
            info!(
                identity = %info.hiphops.identity,
                project_id = %info.hiphops.project_id,
                "license verified"
            );
        } else {
            let codes: Vec<&str> = info.verify_failures.iter().map(|f| f.code()).collect();
            warn!(failures = ?codes, "license verification failed");
        }

        // The slot only ever holds a complete value, so a poisoned lock is still usable
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&info));
        info
    }
}

impl std::fmt::Debug for LicenseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseService")
            .field("anchor", &self.anchor)
            .field("cached", &self.cached())
            .finish_non_exhaustive()
    }
}
