pub mod commands;
pub mod config;
pub mod error;
pub mod remote;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{Result, TudoError};
pub use remote::{ApiClient, TodoStore};
pub use types::{FilterMode, PENDING_TODO_ID, Todo};
