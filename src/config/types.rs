use serde::{Deserialize, Serialize};

/// Global filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Non-core nodes kept by the global filter. Default: 25
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_k: default_top_k() }
    }
}

/// Spotlight count rescaling: cutoff in `[min, max]` maps onto `[min_count, max_count]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_count: 10,
        }
    }
}

/// Edge thickness range for normalized weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThicknessConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for ThicknessConfig {
    fn default() -> Self {
        Self {
            min: default_thickness_min(),
            max: default_thickness_max(),
        }
    }
}

/// Everything the engine reads from `snapgraph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ranking: RankingConfig,
    pub spotlight: SpotlightConfig,
    pub thickness: ThicknessConfig,
}

const fn default_top_k() -> usize { 25 }
const fn default_thickness_min() -> f64 { 1.5 }
const fn default_thickness_max() -> f64 { 15.0 }
