//! Where the license token comes from.

use std::env;

/// Environment variable read for the license token by default.
pub const DEFAULT_TOKEN_ENV: &str = "LICENSE_TOKEN";

/// Supplies the current license token.
///
/// Called once per verification, so implementations should return the
/// latest value rather than a snapshot taken at construction. An absent
/// token is the empty string.
pub trait TokenSource: Send + Sync {
    /// Returns the current token.
    fn token(&self) -> String;
}

impl<F> TokenSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn token(&self) -> String {
        self()
    }
}

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvTokenSource {
    var: String,
}

impl EnvTokenSource {
    /// Reads from the given variable.
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Returns the variable name.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvTokenSource {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

impl TokenSource for EnvTokenSource {
    fn token(&self) -> String {
        // Unset and non-unicode both count as missing
        env::var(&self.var).unwrap_or_default()
    }
}
