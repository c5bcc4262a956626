//! Configuration and session handling.
//!
//! Configuration is stored as `config.yaml` in the user config directory
//! and includes:
//! - The to-do service endpoint
//! - The signed-in user's id and optional API token
//!
//! Environment variables take precedence over the file: `TUDO_BASE_URL`,
//! `TUDO_USER_ID`, `TUDO_API_TOKEN`, and `TUDO_CONFIG_PATH` (alternate
//! config file location).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TudoError};

/// Endpoint used when `api.base_url` is not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Timeout applied to every remote call
const REMOTE_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// To-do service endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Stored session, if signed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

/// Endpoint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Stored session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Numeric user id on the to-do service
    pub user_id: u64,
    /// Optional API token sent as a bearer Authorization header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env_nonempty("TUDO_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", "tudo").ok_or_else(|| {
            TudoError::Config("could not determine a config directory for this platform".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Effective service endpoint: env var, then config file, then default
    pub fn base_url(&self) -> Result<Url> {
        let raw = env_nonempty("TUDO_BASE_URL")
            .or_else(|| self.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Url::parse(&raw)
            .map_err(|e| TudoError::Config(format!("invalid api.base_url '{raw}': {e}")))
    }

    /// Effective user id: env var, then stored session
    pub fn user_id(&self) -> Option<u64> {
        if let Some(raw) = env_nonempty("TUDO_USER_ID") {
            return raw.parse().ok();
        }

        self.auth.as_ref().map(|a| a.user_id)
    }

    /// Effective API token: env var, then stored session
    pub fn token(&self) -> Option<String> {
        if let Some(token) = env_nonempty("TUDO_API_TOKEN") {
            return Some(token);
        }

        self.auth.as_ref().and_then(|a| a.token.clone())
    }

    /// Set and validate the service endpoint
    pub fn set_base_url(&mut self, raw: &str) -> Result<()> {
        Url::parse(raw)
            .map_err(|e| TudoError::Config(format!("invalid api.base_url '{raw}': {e}")))?;
        self.api.base_url = Some(raw.to_string());
        Ok(())
    }

    /// Store a session
    pub fn set_session(&mut self, user_id: u64, token: Option<String>) {
        self.auth = Some(AuthConfig { user_id, token });
    }

    /// Remove the stored session
    pub fn clear_session(&mut self) {
        self.auth = None;
    }

    /// Timeout applied to every remote call
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(REMOTE_TIMEOUT_SECS)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
