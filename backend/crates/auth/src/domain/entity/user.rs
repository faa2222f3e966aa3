//! User Entity
//!
//! A user row is written once at registration and read back by email at
//! login. Every profile column is nullable: the API forwards whatever the
//! client sent, missing fields included.

use platform::password::HashedPassword;
use serde::{Deserialize, Serialize};

/// User about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// bcrypt hash, never the clear text
    pub password_hash: HashedPassword,
}

/// Public view of a freshly registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    /// Store-assigned identifier
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// What login needs from a stored user
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub id: i32,
    pub email: Option<String>,
    /// `None` when the row has no password
    pub password_hash: Option<HashedPassword>,
}

/// Claims embedded in an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: i32,
    pub email: Option<String>,
}

impl From<&UserCredential> for UserClaims {
    fn from(credential: &UserCredential) -> Self {
        Self {
            id: credential.id,
            email: credential.email.clone(),
        }
    }
}
