//! HS256 JWT signer.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Identity, SignedToken};
use crate::domain::providers::TokenSigner;
use crate::error::AppError;

/// Validity window of an issued token.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried by an invite token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub uid: String,
    #[serde(rename = "type")]
    pub account_type: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues HS256 JSON Web Tokens with a fixed validity window.
#[derive(Debug, Clone)]
pub struct JwtSigner {
    ttl: Duration,
}

impl Default for JwtSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl JwtSigner {
    /// Creates a signer issuing tokens valid for [`TOKEN_TTL_DAYS`].
    pub fn new() -> Self {
        Self {
            ttl: Duration::days(TOKEN_TTL_DAYS),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, identity: &Identity, secret: &str) -> Result<SignedToken, AppError> {
        if secret.is_empty() {
            return Err(AppError::sign("signing secret must have a value"));
        }

        let issued_at = Utc::now();
        let claims = Claims {
            uid: identity.uid.clone(),
            account_type: identity.account_type.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map(SignedToken::new)
        .map_err(|e| AppError::sign(e.to_string()))
    }
}

/// Decodes `token` and checks its signature and expiry against `secret`.
///
/// # Errors
///
/// Returns [`AppError::Sign`] if the token is malformed, expired, or was not
/// signed with `secret`.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::sign(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            uid: "17006".to_string(),
            account_type: "PARTNER".to_string(),
        }
    }

    #[test]
    fn test_sign_and_verify_carries_identity() {
        let signer = JwtSigner::new();

        let token = signer.sign(&identity(), "test-secret").unwrap();
        let claims = verify(token.as_str(), "test-secret").unwrap();

        assert_eq!(claims.uid, "17006");
        assert_eq!(claims.account_type, "PARTNER");
    }

    #[test]
    fn test_expiry_is_thirty_days_after_issue() {
        let signer = JwtSigner::new();

        let token = signer.sign(&identity(), "test-secret").unwrap();
        let claims = verify(token.as_str(), "test-secret").unwrap();

        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
        assert_eq!(signer.ttl(), Duration::days(30));
    }

    #[test]
    fn test_signing_twice_both_verify() {
        let signer = JwtSigner::new();

        let first = signer.sign(&identity(), "test-secret").unwrap();
        let second = signer.sign(&identity(), "test-secret").unwrap();

        let first = verify(first.as_str(), "test-secret").unwrap();
        let second = verify(second.as_str(), "test-secret").unwrap();

        assert_eq!(first.uid, second.uid);
        assert_eq!(first.account_type, second.account_type);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let signer = JwtSigner::new();

        let result = signer.sign(&identity(), "");

        assert!(matches!(result, Err(AppError::Sign(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret_fails() {
        let signer = JwtSigner::new();

        let token = signer.sign(&identity(), "test-secret").unwrap();

        assert!(matches!(
            verify(token.as_str(), "other-secret"),
            Err(AppError::Sign(_))
        ));
    }
}
