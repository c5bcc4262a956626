//! Shared TUI components

pub mod banner;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod new_todo_input;
pub mod todo_list;

pub use banner::render_banner;
pub use filter_bar::{FilterBar, FilterBarProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
pub use new_todo_input::{NewTodoInput, NewTodoInputProps};
pub use todo_list::{TodoList, TodoListProps};
