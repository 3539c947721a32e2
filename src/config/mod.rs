// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{EngineConfig, RankingConfig, SpotlightConfig, ThicknessConfig};

use crate::error::{GraphError, Result};
use std::path::Path;

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `snapgraph.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads and validates a specific config file.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = io::load_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML content and validates it.
    ///
    /// # Errors
    /// Returns error on malformed TOML or invalid ranges.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = io::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every range is finite and ordered.
    ///
    /// # Errors
    /// Returns `GraphError::Config` describing the first bad range.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thickness;
        if !t.min.is_finite() || !t.max.is_finite() || t.min > t.max {
            return Err(GraphError::Config(format!(
                "thickness range [{}, {}] must be finite and ordered",
                t.min, t.max
            )));
        }
        let s = &self.spotlight;
        if s.min_count > s.max_count {
            return Err(GraphError::Config(format!(
                "spotlight min_count {} exceeds max_count {}",
                s.min_count, s.max_count
            )));
        }
        Ok(())
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }
}
