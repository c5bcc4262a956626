//! Main todo view: model, filter projection, async operations, component

pub mod filter;
pub mod model;
pub mod operations;
pub mod view;

pub use filter::visible_todos;
pub use model::{
    AppAction, AppState, AppViewModel, compute_view_model, key_to_action, reduce_app_state,
};
pub use operations::{CreateOutcome, DeleteOutcome, FetchOutcome, load_todos, remove_todo, submit_todo};
pub use view::{TodoApp, TodoAppProps};
