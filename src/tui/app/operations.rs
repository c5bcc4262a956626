//! Async operations bridging the remote store and the app model
//!
//! Each operation runs one store call and settles into an outcome the
//! component maps to a completion action. Failures are collapsed here; the
//! banner messages live with the reducer. Functions are generic over
//! `TodoStore` so tests can drive them with a scripted store.

use crate::config::Config;
use crate::error::Result;
use crate::remote::{ApiClient, TodoStore};

use super::model::AppAction;

/// Result of a fetch-list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<crate::types::Todo>),
    Failed,
}

/// Result of a create-item call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The server accepted the create; the returned item's id is ignored
    /// because the confirming re-fetch is authoritative
    Created { title: String },
    Failed,
}

/// Result of a delete-item call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

impl FetchOutcome {
    pub fn into_action(self) -> AppAction {
        match self {
            FetchOutcome::Loaded(todos) => AppAction::TodosLoaded(todos),
            FetchOutcome::Failed => AppAction::FetchFailed,
        }
    }
}

impl CreateOutcome {
    pub fn into_action(self) -> AppAction {
        match self {
            CreateOutcome::Created { title } => AppAction::TodoCreated { title },
            CreateOutcome::Failed => AppAction::CreateFailed,
        }
    }
}

/// Build the HTTP store from the persisted configuration
pub fn store_from_config() -> Result<ApiClient> {
    let config = Config::load()?;
    ApiClient::from_config(&config)
}

/// Fetch the full list for a user
pub async fn load_todos<S: TodoStore>(store: &S, user_id: u64) -> FetchOutcome {
    match store.fetch_todos(user_id).await {
        Ok(todos) => FetchOutcome::Loaded(todos),
        Err(e) => {
            tracing::warn!("failed to fetch todos: {e}");
            FetchOutcome::Failed
        }
    }
}

/// Create a todo with the given title
pub async fn submit_todo<S: TodoStore>(store: &S, title: String, user_id: u64) -> CreateOutcome {
    match store.create_todo(&title, user_id).await {
        Ok(_) => CreateOutcome::Created { title },
        Err(e) => {
            tracing::warn!("failed to create todo: {e}");
            CreateOutcome::Failed
        }
    }
}

/// Delete a todo by id
pub async fn remove_todo<S: TodoStore>(store: &S, id: u64) -> DeleteOutcome {
    match store.delete_todo(id).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => {
            tracing::warn!("failed to delete todo {id}: {e}");
            DeleteOutcome::Failed
        }
    }
}
