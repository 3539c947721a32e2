// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::EngineConfig;
use crate::error::{GraphError, Result};

pub const CONFIG_FILE: &str = "snapgraph.toml";

/// Reads `path` if it exists; a missing file yields defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|e| GraphError::io(e, path))?;
    parse_toml(&content)
}

/// Parses TOML content; absent sections and keys fall back to defaults.
///
/// # Errors
/// Returns `GraphError::Config` on malformed TOML.
pub fn parse_toml(content: &str) -> Result<EngineConfig> {
    Ok(toml::from_str(content)?)
}

/// Writes the configuration as TOML.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to(config: &EngineConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| GraphError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| GraphError::io(e, path))
}
