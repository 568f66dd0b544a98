//! Opaque bearer token issued for an account.

/// A signed, time-limited bearer token.
///
/// The contents are opaque to everything except the signer that issued it.
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken(String);

impl SignedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignedToken(***)")
    }
}
