//! Public key material used to verify license tokens.

use std::borrow::Cow;

/// Embedded PEM-encoded RSA public key for production license verification.
const LICENSE_PUBLIC_KEY: &[u8] = include_bytes!("../assets/publickey.pem");

/// Immutable PEM bytes of the key that signs license tokens.
///
/// The bytes are not parsed until verification, so a corrupt anchor surfaces
/// as [`crate::VerifyFailure::InvalidPublicKey`] rather than a construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchor {
    pem: Cow<'static, [u8]>,
}

impl TrustAnchor {
    /// Returns the anchor compiled into this binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            pem: Cow::Borrowed(LICENSE_PUBLIC_KEY),
        }
    }

    /// Creates an anchor from arbitrary PEM bytes.
    /// Used for testing with a generated key pair.
    #[must_use]
    pub fn from_pem(pem: impl Into<Vec<u8>>) -> Self {
        Self {
            pem: Cow::Owned(pem.into()),
        }
    }

    /// Returns the raw PEM bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pem
    }
}

impl Default for TrustAnchor {
    fn default() -> Self {
        Self::embedded()
    }
}
