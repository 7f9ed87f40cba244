//! Shared helpers for daemon tests.

#![allow(dead_code)]

use std::sync::Arc;

use hook_license::{LicenseService, TrustAnchor};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

const SIGNING_KEY: &str = include_str!("../../../hook-license/tests/fixtures/signing_key.pem");
const SIGNING_PUBLIC_KEY: &str =
    include_str!("../../../hook-license/tests/fixtures/signing_key.pub.pem");

/// A token carrying both claims, signed by the test key.
pub fn valid_token() -> String {
    let claims = json!({
        "license": {"plan": "team", "seats": 10},
        "hiphops.io": {"identity": "acme-corp", "project_id": "proj-7"}
    });
    let key = EncodingKey::from_rsa_pem(SIGNING_KEY.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::RS256), &claims, &key).unwrap()
}

/// A service that always reads `token` and trusts the test key.
pub fn service_with_token(token: String) -> Arc<LicenseService> {
    Arc::new(LicenseService::new(
        TrustAnchor::from_pem(SIGNING_PUBLIC_KEY),
        move || token.clone(),
    ))
}
