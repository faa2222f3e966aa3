//! API DTOs (Data Transfer Objects)
//!
//! Every request field is optional and loosely typed: a missing field
//! reaches the store as NULL, and a field of an unexpected JSON type is
//! converted (or fails) only where its value is used.

use kernel::field::Field;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::RegisteredUser;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    /// Must be a JSON string to be hashed
    pub password: Field,
}

/// Register response payload (`user` next to `success`)
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user: UserSummary,
}

/// Registered user as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<RegisteredUser> for UserSummary {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Field,
    pub password: Field,
}

/// Login response payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
