//! Filtering logic for the todo list
//!
//! Derives the visible subset of todos from the full list and the active
//! filter mode. Ordering is preserved from the source list (server order).

use crate::types::{FilterMode, Todo};

/// Filter todos by the given mode
pub fn visible_todos(todos: &[Todo], filter: FilterMode) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos() -> Vec<Todo> {
        vec![
            Todo {
                id: 1,
                user_id: 7,
                title: "Buy milk".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                user_id: 7,
                title: "Walk the dog".to_string(),
                completed: true,
            },
            Todo {
                id: 3,
                user_id: 7,
                title: "Water plants".to_string(),
                completed: false,
            },
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let todos = todos();
        assert_eq!(visible_todos(&todos, FilterMode::All), todos);
    }

    #[test]
    fn test_active_keeps_uncompleted_in_order() {
        let visible = visible_todos(&todos(), FilterMode::Active);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_completed_keeps_completed_only() {
        let visible = visible_todos(&todos(), FilterMode::Completed);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(visible_todos(&[], FilterMode::All).is_empty());
        assert!(visible_todos(&[], FilterMode::Active).is_empty());
        assert!(visible_todos(&[], FilterMode::Completed).is_empty());
    }
}
