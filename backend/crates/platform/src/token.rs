//! Signed Tokens
//!
//! HS256 JSON Web Tokens signed with a shared secret. The caller supplies
//! its own claims; [`TokenSigner`] adds the registered `iat` and `exp`
//! claims (seconds since the Unix epoch) next to them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Default token lifetime (1 day)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing or decoding failed (bad signature, expired, malformed)
    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Caller claims plus `iat`/`exp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiring<C> {
    #[serde(flatten)]
    pub claims: C,
    /// Issued-at (seconds)
    pub iat: i64,
    /// Expiry (seconds)
    pub exp: i64,
}

/// Issues and verifies tokens for a single secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign `claims`, expiring `ttl` after now
    pub fn sign<C: Serialize>(&self, claims: C) -> Result<String, TokenError> {
        self.sign_at(claims, Utc::now())
    }

    /// Sign `claims` as if issued at `issued_at`
    pub fn sign_at<C: Serialize>(
        &self,
        claims: C,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let payload = Expiring {
            claims,
            iat,
            exp: iat + self.ttl.as_secs() as i64,
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &payload, &self.encoding)?;
        Ok(token)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<Expiring<C>, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<Expiring<C>>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct TestClaims {
        id: i32,
        email: Option<String>,
    }

    fn claims() -> TestClaims {
        TestClaims {
            id: 1,
            email: Some("a@x.com".to_string()),
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new(b"test-secret", DEFAULT_TOKEN_TTL);
        let token = signer.sign(claims()).unwrap();

        let decoded: Expiring<TestClaims> = signer.verify(&token).unwrap();
        assert_eq!(decoded.claims, claims());
        assert_eq!(decoded.exp - decoded.iat, 86_400);
    }

    #[test]
    fn test_claims_are_flat() {
        let signer = TokenSigner::new(b"test-secret", DEFAULT_TOKEN_TTL);
        let token = signer.sign(claims()).unwrap();

        let decoded: Expiring<serde_json::Value> = signer.verify(&token).unwrap();
        assert_eq!(decoded.claims["id"], 1);
        assert_eq!(decoded.claims["email"], "a@x.com");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = TokenSigner::new(b"test-secret", DEFAULT_TOKEN_TTL);
        let other = TokenSigner::new(b"other-secret", DEFAULT_TOKEN_TTL);
        let token = signer.sign(claims()).unwrap();

        assert!(other.verify::<TestClaims>(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new(b"test-secret", DEFAULT_TOKEN_TTL);
        let two_days_ago = Utc::now() - chrono::Duration::days(2);
        let token = signer.sign_at(claims(), two_days_ago).unwrap();

        assert!(signer.verify::<TestClaims>(&token).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = TokenSigner::new(b"test-secret", DEFAULT_TOKEN_TTL);
        assert!(!format!("{:?}", signer).contains("test-secret"));
    }
}
