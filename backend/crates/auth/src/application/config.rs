//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::password::DEFAULT_COST;
use platform::token::{DEFAULT_TOKEN_TTL, TokenSigner};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared secret for HS256 token signing
    pub jwt_secret: Vec<u8>,
    /// Token lifetime (1 day)
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    /// Create config with a random signing secret
    ///
    /// Tokens issued with it stop verifying once the process restarts.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec())
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Signer for the configured secret and TTL
    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.jwt_secret, self.token_ttl)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
