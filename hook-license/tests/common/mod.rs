//! Shared test helpers for license tests.

#![allow(dead_code)]

use hook_license::TrustAnchor;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

/// Private key whose public half is [`SIGNING_PUBLIC_KEY`].
pub const SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");

/// Public half of [`SIGNING_KEY`].
pub const SIGNING_PUBLIC_KEY: &str = include_str!("../fixtures/signing_key.pub.pem");

/// Unrelated private key, for tokens the anchor must not accept.
pub const FOREIGN_KEY: &str = include_str!("../fixtures/foreign_key.pem");

/// Returns an anchor matching [`SIGNING_KEY`].
pub fn test_anchor() -> TrustAnchor {
    TrustAnchor::from_pem(SIGNING_PUBLIC_KEY)
}

/// Signs `claims` as an RS256 JWT with the given PEM private key.
pub fn sign_with(private_pem: &str, claims: &Value) -> String {
    let key = EncodingKey::from_rsa_pem(private_pem.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::RS256), claims, &key).unwrap()
}

/// Signs `claims` with the test signing key.
pub fn sign(claims: &Value) -> String {
    sign_with(SIGNING_KEY, claims)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Claims carrying both the license and hiphops.io sections, valid for an hour.
pub fn full_claims() -> Value {
    json!({
        "sub": "acme",
        "iat": now(),
        "exp": now() + 3600,
        "license": {
            "plan": "enterprise",
            "seats": 25,
            "features": ["flows", "audit"]
        },
        "hiphops.io": {
            "identity": "acme-corp",
            "project_id": "proj-42"
        }
    })
}

/// A token that passes every check.
pub fn valid_token() -> String {
    sign(&full_claims())
}
