//! License token verification.
//!
//! Checks run in a fixed order. The first three (token present, key parses,
//! signature and validity window hold) stop at the first failure. The two
//! claim checks both run and report together.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{decode, get_current_timestamp, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::anchor::TrustAnchor;
use crate::claims::{HiphopsClaim, LicenseClaim, LicenseInfo, HIPHOPS_CLAIM, LICENSE_CLAIM};
use crate::error::VerifyFailure;

/// Verifies `token` against `anchor` and extracts its claims.
///
/// Only an empty string counts as missing. Surrounding whitespace is stripped
/// before decoding, so a blank token is reported as invalid. Never fails: every
/// problem is reported through [`LicenseInfo::verify_failures`].
#[must_use]
pub fn verify(token: &str, anchor: &TrustAnchor) -> LicenseInfo {
    if token.is_empty() {
        return LicenseInfo::rejected(VerifyFailure::MissingLicenseToken);
    }

    let key = match DecodingKey::from_rsa_pem(anchor.as_bytes()) {
        Ok(key) => key,
        Err(e) => {
            debug!(error = %e, "trust anchor rejected");
            return LicenseInfo::rejected(VerifyFailure::InvalidPublicKey);
        }
    };

    let mut claims = match decode::<Map<String, Value>>(token.trim(), &key, &validation()) {
        Ok(data) => data.claims,
        Err(e) => {
            debug!(error = %e, "license token rejected");
            return LicenseInfo::rejected(VerifyFailure::InvalidLicenseToken);
        }
    };

    if issued_in_future(&claims, get_current_timestamp()) {
        debug!("license token rejected: issued in the future");
        return LicenseInfo::rejected(VerifyFailure::InvalidLicenseToken);
    }

    let mut failures = Vec::new();

    let license = take_license_claim(&mut claims).unwrap_or_else(|| {
        failures.push(VerifyFailure::MissingLicenseClaim);
        LicenseClaim::default()
    });

    let hiphops = take_hiphops_claim(&mut claims).unwrap_or_else(|| {
        failures.push(VerifyFailure::MissingHiphopsClaim);
        HiphopsClaim::default()
    });

    LicenseInfo::from_claims(license, hiphops, failures)
}

/// Returns a short, non-reversible identifier for a token, safe to log.
#[must_use]
pub fn token_fingerprint(token: &str) -> String {
    let hash = Sha256::digest(token.trim().as_bytes());
    URL_SAFE_NO_PAD.encode(&hash[..8])
}

/// RS256 only; `exp`/`nbf` checked when present, nothing required, no skew.
/// `iat` is not covered here, see [`issued_in_future`].
fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// True when a numeric `iat` lies after `now`, with no leeway.
fn issued_in_future(claims: &Map<String, Value>, now: u64) -> bool {
    claims
        .get("iat")
        .and_then(Value::as_f64)
        .is_some_and(|iat| iat > now as f64)
}

fn take_license_claim(claims: &mut Map<String, Value>) -> Option<LicenseClaim> {
    match claims.remove(LICENSE_CLAIM)? {
        Value::Object(license) => Some(license),
        _ => None,
    }
}

fn take_hiphops_claim(claims: &mut Map<String, Value>) -> Option<HiphopsClaim> {
    // serde would also accept a positional array for a struct
    match claims.remove(HIPHOPS_CLAIM)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}
