//! # Todo — the one resource with a real field mapping
//!
//! The backend stores a `title` and a `description`; the UI only knows a
//! single `text`. The projection is:
//!
//! - reading: `text` always comes from the backend `title`
//!   ([`TodoRecord::into_todo`]); the backend `description` is never shown.
//! - writing: `title` **and** `description` are both set to the text
//!   ([`NewTodo::from_text`], [`TodoPatch::with_text`]). The duplication is
//!   deliberate product behavior and is preserved as-is.

use serde::{Deserialize, Serialize};

/// A todo as the UI consumes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// A todo row as the backend returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TodoRecord {
    /// Project the backend row into the UI shape.
    pub fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            text: self.title,
            completed: self.completed,
        }
    }
}

/// Body for `POST /todos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

impl NewTodo {
    pub fn from_text(text: &str) -> Self {
        Self {
            title: text.to_string(),
            description: text.to_string(),
        }
    }
}

/// Body for `PUT /todos/{id}`.
///
/// `completed` is always sent; `title`/`description` only when new text is
/// supplied.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TodoPatch {
    /// A patch that only flips the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed,
            ..Self::default()
        }
    }

    /// A patch that also replaces the text.
    pub fn with_text(completed: bool, text: &str) -> Self {
        Self {
            completed,
            title: Some(text.to_string()),
            description: Some(text.to_string()),
        }
    }
}
