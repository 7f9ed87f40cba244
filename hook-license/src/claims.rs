//! Claim types and the verification result served to callers.

use serde::{Deserialize, Serialize};

use crate::error::VerifyFailure;

/// Name of the claim holding the license terms.
pub const LICENSE_CLAIM: &str = "license";

/// Name of the claim identifying the license holder and project.
pub const HIPHOPS_CLAIM: &str = "hiphops.io";

/// License terms as issued. The schema is owned by the issuer, so the
/// object is passed through untouched.
pub type LicenseClaim = serde_json::Map<String, serde_json::Value>;

/// Holder and project the license was issued to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiphopsClaim {
    /// Identifier of the license holder.
    pub identity: String,
    /// Identifier of the licensed project.
    pub project_id: String,
}

/// Outcome of verifying the license token.
///
/// `verified` is true exactly when `verify_failures` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// Whether every check passed.
    pub verified: bool,
    /// Every failure encountered, in check order.
    pub verify_failures: Vec<VerifyFailure>,
    /// The `license` claim, empty if absent or the token was rejected.
    pub license: LicenseClaim,
    /// The `hiphops.io` claim, empty if absent or the token was rejected.
    pub hiphops: HiphopsClaim,
}

impl LicenseInfo {
    /// Builds a result for a token rejected before any claim was read.
    #[must_use]
    pub fn rejected(failure: VerifyFailure) -> Self {
        Self {
            verified: false,
            verify_failures: vec![failure],
            ..Self::default()
        }
    }

    /// Builds a result from extracted claims and the failures collected along the way.
    #[must_use]
    pub fn from_claims(
        license: LicenseClaim,
        hiphops: HiphopsClaim,
        verify_failures: Vec<VerifyFailure>,
    ) -> Self {
        Self {
            verified: verify_failures.is_empty(),
            verify_failures,
            license,
            hiphops,
        }
    }
}
