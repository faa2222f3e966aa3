//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, RegisteredUser, UserCredential};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return the stored id, name and email
    async fn create(&self, user: &NewUser) -> AuthResult<RegisteredUser>;

    /// Find the first user whose email matches exactly
    ///
    /// A `None` email never matches.
    async fn find_credential_by_email(
        &self,
        email: Option<&str>,
    ) -> AuthResult<Option<UserCredential>>;
}
