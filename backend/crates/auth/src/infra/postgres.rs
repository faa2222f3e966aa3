//! PostgreSQL Repository Implementations

use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, RegisteredUser, UserCredential};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<RegisteredUser> {
        let row = sqlx::query_as::<_, RegisteredUserRow>(
            r#"
            INSERT INTO users (name, email, phone, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_registered_user())
    }

    async fn find_credential_by_email(
        &self,
        email: Option<&str>,
    ) -> AuthResult<Option<UserCredential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_credential()))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct RegisteredUserRow {
    id: i32,
    name: Option<String>,
    email: Option<String>,
}

impl RegisteredUserRow {
    fn into_registered_user(self) -> RegisteredUser {
        RegisteredUser {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i32,
    email: Option<String>,
    password: Option<String>,
}

impl CredentialRow {
    fn into_credential(self) -> UserCredential {
        UserCredential {
            id: self.id,
            email: self.email,
            password_hash: self.password.map(HashedPassword::from_stored),
        }
    }
}
