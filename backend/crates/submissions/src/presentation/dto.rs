//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional and loosely typed, converted to their
//! column types here; stored rows are echoed back with their column names.

use kernel::field::Field;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{CompetitionEntry, Contact, NewCompetitionEntry, NewContact};
use crate::error::SubmissionError;

// ============================================================================
// Contact
// ============================================================================

/// Contact request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    pub message: Field,
}

impl From<ContactRequest> for NewContact {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name.into_text(),
            email: req.email.into_text(),
            phone: req.phone.into_text(),
            message: req.message.into_text(),
        }
    }
}

/// Contact response payload
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub contact: ContactRow,
}

/// Stored contact as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct ContactRow {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl From<Contact> for ContactRow {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            message: contact.message,
        }
    }
}

// ============================================================================
// Competition
// ============================================================================

/// Competition entry request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompetitionRequest {
    /// Integer or a string holding one
    pub user_id: Field,
    pub idea_title: Field,
    pub description: Field,
}

impl TryFrom<CompetitionRequest> for NewCompetitionEntry {
    type Error = SubmissionError;

    fn try_from(req: CompetitionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: req.user_id.into_integer("user_id")?,
            idea_title: req.idea_title.into_text(),
            description: req.description.into_text(),
        })
    }
}

/// Competition entry response payload
#[derive(Debug, Clone, Serialize)]
pub struct CompetitionResponse {
    pub entry: CompetitionEntryRow,
}

/// Stored entry as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct CompetitionEntryRow {
    pub id: i32,
    pub user_id: Option<i32>,
    pub idea_title: Option<String>,
    pub description: Option<String>,
}

impl From<CompetitionEntry> for CompetitionEntryRow {
    fn from(entry: CompetitionEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            idea_title: entry.idea_title,
            description: entry.description,
        }
    }
}
