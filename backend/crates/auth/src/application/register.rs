//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::field::Field;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, RegisteredUser};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Hashed only if it is a string
    pub password: Field,
}

/// Register output
pub struct RegisterOutput {
    pub user: RegisteredUser,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // No uniqueness pre-check: the store decides
        let password = input
            .password
            .into_string("password")?
            .map(ClearTextPassword::new)
            .ok_or_else(|| AuthError::Internal("password is missing".to_string()))?;

        let password_hash = password.hash_blocking(self.config.bcrypt_cost).await?;

        let user = self
            .user_repo
            .create(&NewUser {
                name: input.name,
                email: input.email,
                phone: input.phone,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(RegisterOutput { user })
    }
}
