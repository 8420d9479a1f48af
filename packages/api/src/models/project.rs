use serde::{Deserialize, Serialize};

/// A portfolio project. Read-only from the frontend's point of view and
/// passed through without renaming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: u64,
    pub title: String,
    pub position: String,
    pub status: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl PortfolioProject {
    /// Case-insensitive match against title, description, position and
    /// status. An empty (or whitespace) query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.description, &self.position, &self.status]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
