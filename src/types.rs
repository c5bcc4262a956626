//! Core domain types shared across the client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Id carried by a pending (not yet server-confirmed) todo.
pub const PENDING_TODO_ID: u64 = 0;

/// A single to-do entry owned by a user.
///
/// Matches the service wire format (camelCase JSON). The id is
/// server-assigned; `PENDING_TODO_ID` marks the client-only placeholder
/// shown between a create and the confirming re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    /// Owning user
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Build the optimistic placeholder for a just-accepted create
    pub fn pending(user_id: u64, title: impl Into<String>) -> Self {
        Self {
            id: PENDING_TODO_ID,
            user_id,
            title: title.into(),
            completed: false,
        }
    }
}

/// View-only classification of todos for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Whether a todo is visible under this mode
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !todo.completed,
            FilterMode::Completed => todo.completed,
        }
    }

    /// Cycle All -> Active -> Completed -> All
    pub fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "All"),
            FilterMode::Active => write!(f, "Active"),
            FilterMode::Completed => write!(f, "Completed"),
        }
    }
}
