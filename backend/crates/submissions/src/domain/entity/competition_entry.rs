//! Competition Entry Entity

/// Competition entry about to be stored
///
/// `user_id` is taken on trust: it may name a user that does not exist.
#[derive(Debug, Clone, Default)]
pub struct NewCompetitionEntry {
    pub user_id: Option<i32>,
    pub idea_title: Option<String>,
    pub description: Option<String>,
}

/// Stored competition entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionEntry {
    /// Store-assigned identifier
    pub id: i32,
    pub user_id: Option<i32>,
    pub idea_title: Option<String>,
    pub description: Option<String>,
}
