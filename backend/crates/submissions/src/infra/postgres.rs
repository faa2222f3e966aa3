//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::{CompetitionEntry, Contact, NewCompetitionEntry, NewContact};
use crate::domain::repository::{CompetitionRepository, ContactRepository};
use crate::error::SubmissionResult;

/// PostgreSQL-backed submission repository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Contact Repository Implementation
// ============================================================================

impl ContactRepository for PgSubmissionRepository {
    async fn insert_contact(&self, contact: &NewContact) -> SubmissionResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, phone, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, message
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_contact())
    }
}

// ============================================================================
// Competition Repository Implementation
// ============================================================================

impl CompetitionRepository for PgSubmissionRepository {
    async fn insert_entry(
        &self,
        entry: &NewCompetitionEntry,
    ) -> SubmissionResult<CompetitionEntry> {
        let row = sqlx::query_as::<_, CompetitionEntryRow>(
            r#"
            INSERT INTO competitions (user_id, idea_title, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, idea_title, description
            "#,
        )
        .bind(entry.user_id)
        .bind(&entry.idea_title)
        .bind(&entry.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entry())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i32,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    message: Option<String>,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CompetitionEntryRow {
    id: i32,
    user_id: Option<i32>,
    idea_title: Option<String>,
    description: Option<String>,
}

impl CompetitionEntryRow {
    fn into_entry(self) -> CompetitionEntry {
        CompetitionEntry {
            id: self.id,
            user_id: self.user_id,
            idea_title: self.idea_title,
            description: self.description,
        }
    }
}
