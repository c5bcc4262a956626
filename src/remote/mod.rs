//! Remote to-do store.
//!
//! The service is a plain JSON CRUD API keyed by user id. This module
//! defines the store interface the view-state controller consumes; `api`
//! provides the HTTP implementation.

pub mod api;

use crate::error::Result;
use crate::types::Todo;

pub use api::ApiClient;

/// Common interface to the remote to-do service
pub trait TodoStore: Send + Sync {
    /// Fetch all todos owned by a user, in server order
    fn fetch_todos(
        &self,
        user_id: u64,
    ) -> impl std::future::Future<Output = Result<Vec<Todo>>> + Send;

    /// Create a new todo; the server assigns the id
    fn create_todo(
        &self,
        title: &str,
        user_id: u64,
    ) -> impl std::future::Future<Output = Result<Todo>> + Send;

    /// Delete a todo by id
    fn delete_todo(&self, id: u64) -> impl std::future::Future<Output = Result<()>> + Send;
}
