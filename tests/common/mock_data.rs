//! Mock data builders for creating test todos and a scripted store.
//!
//! The builders create test data without a running service; `MockStore`
//! implements `TodoStore` over an in-memory list with per-operation
//! failure switches.

use std::sync::Mutex;

use tudo::error::{Result, TudoError};
use tudo::remote::TodoStore;
use tudo::types::Todo;

/// Builder for creating test todos
pub struct TodoBuilder {
    todo: Todo,
}

impl TodoBuilder {
    /// Create a new todo builder with the given id
    pub fn new(id: u64) -> Self {
        Self {
            todo: Todo {
                id,
                user_id: 7,
                title: format!("Test todo {id}"),
                completed: false,
            },
        }
    }

    /// Set the owning user
    pub fn user(mut self, user_id: u64) -> Self {
        self.todo.user_id = user_id;
        self
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.todo.title = title.to_string();
        self
    }

    /// Mark the todo completed
    pub fn completed(mut self) -> Self {
        self.todo.completed = true;
        self
    }

    /// Build the todo
    pub fn build(self) -> Todo {
        self.todo
    }
}

/// Create a basic todo with minimal setup
pub fn mock_todo(id: u64, title: &str, completed: bool) -> Todo {
    let builder = TodoBuilder::new(id).title(title);
    if completed {
        builder.completed().build()
    } else {
        builder.build()
    }
}

/// Scripted in-memory store for driving the async operations in tests
pub struct MockStore {
    todos: Mutex<Vec<Todo>>,
    next_id: Mutex<u64>,
    pub fail_fetch: bool,
    pub fail_create: bool,
    pub fail_delete: bool,
}

impl MockStore {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: Mutex::new(todos),
            next_id: Mutex::new(next_id),
            fail_fetch: false,
            fail_create: false,
            fail_delete: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_todos(vec![])
    }

    /// Flip on a failure switch
    pub fn failing(mut self, operation: &str) -> Self {
        match operation {
            "fetch" => self.fail_fetch = true,
            "create" => self.fail_create = true,
            "delete" => self.fail_delete = true,
            other => panic!("unknown operation '{other}'"),
        }
        self
    }
}

impl TodoStore for MockStore {
    async fn fetch_todos(&self, user_id: u64) -> Result<Vec<Todo>> {
        if self.fail_fetch {
            return Err(TudoError::Api("to-do service returned 404".to_string()));
        }
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_todo(&self, title: &str, user_id: u64) -> Result<Todo> {
        if self.fail_create {
            return Err(TudoError::Api("to-do service returned 500".to_string()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        let todo = Todo {
            id: *next_id,
            user_id,
            title: title.to_string(),
            completed: false,
        };
        *next_id += 1;
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn delete_todo(&self, id: u64) -> Result<()> {
        if self.fail_delete {
            return Err(TudoError::Api("to-do service returned 500".to_string()));
        }
        self.todos.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}
