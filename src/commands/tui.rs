//! Fullscreen TUI entry point

use crate::config::Config;
use crate::error::{Result, TudoError};

/// Fullscreen TUI for the signed-in user's todo list
///
/// NOTE: This function creates its own tokio runtime because it's an entry
/// point for the TUI. This is intentional and safe since it's not called
/// from within another async context.
pub fn cmd_tui() -> Result<()> {
    use crate::tui::TodoApp;
    use iocraft::prelude::*;

    let config = Config::load()?;
    let Some(user_id) = config.user_id() else {
        return Err(TudoError::Auth(
            "not signed in; run `tudo login <user-id>`".to_string(),
        ));
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| TudoError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(TodoApp(user_id: Some(user_id)))
            .fullscreen()
            .await
            .map_err(|e| TudoError::Other(format!("TUI error: {}", e)))
    })
}
