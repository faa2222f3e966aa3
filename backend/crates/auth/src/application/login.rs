//! Login Use Case
//!
//! Verifies email + password and issues a signed token.

use std::sync::Arc;

use kernel::field::Field;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::UserClaims;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    /// Checked only once the user is found
    pub password: Field,
}

/// Login output
pub struct LoginOutput {
    /// HS256 JWT with `id`, `email`, `iat`, `exp`
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let credential = self
            .user_repo
            .find_credential_by_email(input.email.as_deref())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Missing inputs to the comparison are server failures, not mismatches
        let password = input
            .password
            .into_string("password")?
            .map(ClearTextPassword::new)
            .ok_or_else(|| AuthError::Internal("password is missing".to_string()))?;
        let stored = credential.password_hash.clone().ok_or_else(|| {
            AuthError::Internal(format!("user {} has no stored password", credential.id))
        })?;

        if !stored.verify_blocking(password).await? {
            return Err(AuthError::InvalidPassword);
        }

        let token = self
            .config
            .token_signer()
            .sign(UserClaims::from(&credential))?;

        tracing::info!(user_id = credential.id, "User logged in");

        Ok(LoginOutput { token })
    }
}
