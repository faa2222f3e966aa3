//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Per-hash random salt (two hashes of the same password never match)
//! - Configurable work factor (cost), 10 by default
//! - Zeroization of clear text on drop
//! - Async wrappers that move the CPU-bound work onto the blocking pool
//!
//! Stored values use the modular crypt format (`$2b$10$...`), which is what
//! every mainstream bcrypt implementation reads and writes.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Default bcrypt cost (2^10 rounds)
pub const DEFAULT_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),

    /// Blocking task was cancelled or panicked
    #[error("Password hashing task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// No policy is applied here: whatever the client sent is hashed as-is.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with a fresh random salt
    ///
    /// Blocks the calling thread for the duration of the key schedule; use
    /// [`ClearTextPassword::hash_blocking`] from async code.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_bytes(), cost)?;
        Ok(HashedPassword { hash })
    }

    /// Hash on tokio's blocking pool
    pub async fn hash_blocking(self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        tokio::task::spawn_blocking(move || self.hash(cost)).await?
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in modular crypt format
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashedPassword, MIN_COST};
///
/// let password = ClearTextPassword::new("pw123".to_string());
/// let hashed = password.hash(MIN_COST).unwrap();
///
/// let restored = HashedPassword::from_stored(hashed.as_str());
/// assert!(restored.verify(&password));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a value read back from storage
    ///
    /// The value is not validated: a malformed hash simply never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` for a wrong password and for a stored value that is
    /// not a bcrypt hash.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }

    /// Verify on tokio's blocking pool
    pub async fn verify_blocking(
        self,
        password: ClearTextPassword,
    ) -> Result<bool, PasswordHashError> {
        let matched = tokio::task::spawn_blocking(move || self.verify(&password)).await?;
        Ok(matched)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
