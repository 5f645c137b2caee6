//! Configuration loading from friendnet.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for friendnet.toml.
#[derive(Debug, Deserialize, Default)]
pub struct FriendnetConfig {
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from friendnet.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<FriendnetConfig>> {
    let path = root.join("friendnet.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid friendnet.toml")?;
    Ok(Some(cfg))
}
