//! Verification failure codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a license token failed verification.
///
/// These are reported as data inside [`crate::LicenseInfo`], serialized as
/// their snake_case code (e.g. `"invalid_license_token"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyFailure {
    /// No token was provided.
    #[error("no license token provided")]
    MissingLicenseToken,

    /// The embedded public key could not be parsed.
    #[error("license public key is not a valid PEM RSA public key")]
    InvalidPublicKey,

    /// Token is malformed, has a bad signature, or is outside its validity window.
    #[error("license token is malformed, expired or not signed by the trusted key")]
    InvalidLicenseToken,

    /// Token carries no usable `license` claim.
    #[error("license token has no license claim")]
    MissingLicenseClaim,

    /// Token carries no usable `hiphops.io` claim.
    #[error("license token has no hiphops.io claim")]
    MissingHiphopsClaim,
}

impl VerifyFailure {
    /// Returns the wire code for this failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingLicenseToken => "missing_license_token",
            Self::InvalidPublicKey => "invalid_public_key",
            Self::InvalidLicenseToken => "invalid_license_token",
            Self::MissingLicenseClaim => "missing_license_claim",
            Self::MissingHiphopsClaim => "missing_hiphops_claim",
        }
    }
}
