mod config;
mod session;
mod tui;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use session::{cmd_login, cmd_logout, cmd_whoami};
pub use tui::cmd_tui;
