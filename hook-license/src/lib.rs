//! License verification and caching for the hook daemon.
//!
//! This module handles:
//! - RS256 signature verification of the license token against an embedded public key
//! - Extraction of the `license` and `hiphops.io` claims
//! - A process-lifetime cache of the verification outcome, refreshed only on demand
//!
//! # Design Principles
//!
//! - **Failures are data**: a failed verification is a normal [`LicenseInfo`]
//!   with `verified == false`, never an `Err`
//! - **No phoning home**: verification is offline and synchronous
//! - **No token leakage**: the raw token is never logged or stored
//!
//! # Token Format
//!
//! Tokens are compact JWTs (`header.payload.signature`) signed with RS256.
//! `exp` and `nbf` are honoured when present but not required.

mod anchor;
mod claims;
mod error;
mod service;
mod source;
mod verify;

pub use anchor::TrustAnchor;
pub use claims::{HiphopsClaim, LicenseClaim, LicenseInfo, HIPHOPS_CLAIM, LICENSE_CLAIM};
pub use error::VerifyFailure;
pub use service::LicenseService;
pub use source::{EnvTokenSource, TokenSource, DEFAULT_TOKEN_ENV};
pub use verify::{token_fingerprint, verify};
