//! Configuration file management for Tavola.
//!
//! Priority: environment variables > `~/.config/tavola/config.json` > defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tavola_core::TavolaError;
use tavola_core::config::ClientConfig;
use tavola_core::error::Result;

pub const BASE_URL_ENV: &str = "TAVOLA_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "TAVOLA_API_TIMEOUT_SECS";

/// Loads the client configuration from the default location and the environment.
pub fn load_client_config() -> Result<ClientConfig> {
    let mut config = match get_config_path() {
        Some(path) => load_from_path(&path)?,
        None => {
            tracing::debug!("Home directory unknown, using default configuration");
            ClientConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    Ok(config)
}

/// Reads a config file. A missing file yields the defaults.
pub fn load_from_path(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        return Ok(ClientConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TavolaError::config(format!(
            "Failed to read configuration file at {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TavolaError::config(format!(
            "Failed to parse configuration file at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Applies `TAVOLA_API_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides(
    config: &mut ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }
    if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
        config.timeout_secs = raw.trim().parse().map_err(|_| {
            TavolaError::config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))
        })?;
    }
    Ok(())
}

/// Returns the path to the configuration file: ~/.config/tavola/config.json
pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("tavola").join("config.json"))
}
