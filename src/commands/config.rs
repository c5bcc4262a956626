//! Configuration commands for managing tudo settings.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Get a configuration value

use owo_colors::OwoColorize;

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Result, TudoError};

const VALID_KEYS: &str = "api.base_url, auth.token";

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".cyan().bold());
    println!();

    match config.api.base_url.as_deref() {
        Some(url) => println!("{}: {url}", "api.base_url".cyan()),
        None => println!(
            "{}: {} {}",
            "api.base_url".cyan(),
            DEFAULT_BASE_URL,
            "(default)".dimmed()
        ),
    }

    println!();
    println!("{}:", "auth".cyan());
    match &config.auth {
        Some(auth) => {
            println!("  user_id: {}", auth.user_id);
            let token_status = if auth.token.is_some() {
                "configured".green().to_string()
            } else {
                "not configured".dimmed().to_string()
            };
            println!("  token: {token_status}");
        }
        None => println!("  {}", "not signed in".dimmed()),
    }

    println!();
    println!(
        "{}",
        format!("Config file: {}", Config::config_path()?.display()).dimmed()
    );
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api.base_url" => {
            config.set_base_url(value)?;
            config.save()?;
            println!("Set {} to {value}", "api.base_url".cyan());
        }
        "auth.token" => {
            let Some(auth) = config.auth.as_mut() else {
                return Err(TudoError::Auth(
                    "not signed in; run `tudo login <user-id>` first".to_string(),
                ));
            };
            auth.token = Some(value.to_string());
            config.save()?;
            println!("Set {}", "auth.token".cyan());
        }
        _ => {
            return Err(TudoError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    }

    Ok(())
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;

    match key {
        "api.base_url" => {
            println!("{}", config.base_url()?);
        }
        "auth.token" => {
            let Some(token) = config.token() else {
                return Err(TudoError::Config("auth.token not set".to_string()));
            };
            println!(
                "{} (masked - showing first 2 and last 2 characters)",
                mask_sensitive_value(&token)
            );
        }
        _ => {
            return Err(TudoError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sensitive_value_ascii() {
        assert_eq!(mask_sensitive_value("abcdef"), "ab...ef");
        assert_eq!(mask_sensitive_value("12345678"), "12...78");
    }

    #[test]
    fn test_mask_sensitive_value_short() {
        assert_eq!(mask_sensitive_value("abcd"), "****");
        assert_eq!(mask_sensitive_value("a"), "****");
        assert_eq!(mask_sensitive_value(""), "****");
    }

    #[test]
    fn test_mask_sensitive_value_multibyte_utf8() {
        assert_eq!(mask_sensitive_value("émañ日本語ok"), "ém...ok");
        assert_eq!(mask_sensitive_value("éàöü"), "****");
    }
}
