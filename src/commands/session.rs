//! Session commands: login, logout, whoami

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{Result, TudoError};

/// Store the user id (and optional API token) for subsequent runs
pub fn cmd_login(user_id: u64, token: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;
    let has_token = token.is_some();
    config.set_session(user_id, token.map(str::to_string));
    config.save()?;

    if has_token {
        println!(
            "Signed in as user {} (token stored)",
            user_id.to_string().cyan()
        );
    } else {
        println!("Signed in as user {}", user_id.to_string().cyan());
    }
    Ok(())
}

/// Remove the stored session
pub fn cmd_logout() -> Result<()> {
    let mut config = Config::load()?;
    if config.auth.is_none() {
        println!("{}", "No session to clear".dimmed());
        return Ok(());
    }

    config.clear_session();
    config.save()?;
    println!("Signed out");
    Ok(())
}

/// Show the signed-in user
pub fn cmd_whoami() -> Result<()> {
    let config = Config::load()?;
    match config.user_id() {
        Some(id) => {
            println!("user {}", id.to_string().cyan());
            Ok(())
        }
        None => Err(TudoError::Auth(
            "not signed in; run `tudo login <user-id>`".to_string(),
        )),
    }
}
