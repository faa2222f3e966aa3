//! Contact Entity

/// Contact message about to be stored
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// Stored contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}
