//! Optional user configuration.
//!
//! Read from `<config_dir>/patchline/config.toml`; a missing file means
//! defaults. Nothing here is required for any command to work.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Default output mode: "pretty" | "text" | "json".
    #[serde(default)]
    pub output: Option<String>,
    /// Default timeline data file, used when `--data` and `PATCHLINE_DATA`
    /// are absent.
    #[serde(default)]
    pub data: Option<PathBuf>,
}

/// Load the user config, or defaults when no file exists.
///
/// # Errors
///
/// Returns an error only when a config file exists but cannot be read or
/// parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("patchline/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
