// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Core set is empty after trimming ids")]
    InvalidCoreSet,

    #[error("Cutoff fraction {0} is outside 0..=100")]
    CutoffOutOfRange(f64),

    #[error("Source provider failed: {0}")]
    Source(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

impl GraphError {
    /// Attaches a path to an I/O failure.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        GraphError::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by the caller's request rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidCoreSet | Self::CutoffOutOfRange(_))
    }
}
