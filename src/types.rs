// src/types.rs
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Seconds (or any monotonic integer unit) attached to an interaction.
pub type Timestamp = i64;

/// A point on the timeline. Slider positions land between timestamps.
pub type Cutoff = f64;

/// A single account in the interaction graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub is_core: bool,
}

impl Account {
    /// Creates an account with default attributes.
    #[must_use]
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: String::new(),
            follower_count: 0,
            following_count: 0,
            is_core: false,
        }
    }

    /// Display label: the username, or the id when no username is known.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.username.is_empty() {
            &self.id
        } else {
            &self.username
        }
    }
}

/// One raw, directed interaction. Multiple events may exist per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub source: String,
    pub target: String,
    pub timestamp: Timestamp,
    #[serde(default = "default_edge_type")]
    pub edge_type: String,
}

fn default_edge_type() -> String {
    "Unknown".to_string()
}

impl InteractionEvent {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        timestamp: Timestamp,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            timestamp,
            edge_type: edge_type.into(),
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// True if this event connects `a` and `b` in either direction.
    #[must_use]
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Ordered, distinct, non-empty list of core account ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreSet {
    ids: Vec<String>,
}

impl CoreSet {
    /// Trims every id, drops blanks and duplicates (first occurrence wins).
    ///
    /// # Errors
    /// Returns `InvalidCoreSet` if nothing is left.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if !id.is_empty() && !out.iter().any(|o| o == id) {
                out.push(id.to_string());
            }
        }
        if out.is_empty() {
            return Err(GraphError::InvalidCoreSet);
        }
        Ok(Self { ids: out })
    }

    /// Parses a comma separated list such as `"3, 17,42"`.
    ///
    /// # Errors
    /// Returns `InvalidCoreSet` if the list holds no ids.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input.split(','))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|c| c == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

/// Earliest and latest event timestamps of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min: Timestamp,
    pub max: Timestamp,
}

impl TimeBounds {
    /// Maps a slider position in `[0, 100]` linearly onto `[min, max]`.
    ///
    /// # Errors
    /// Returns `CutoffOutOfRange` for non-finite or out-of-range fractions.
    #[allow(clippy::cast_precision_loss)]
    pub fn cutoff_for_fraction(&self, fraction: f64) -> Result<Cutoff> {
        if !fraction.is_finite() || !(0.0..=100.0).contains(&fraction) {
            return Err(GraphError::CutoffOutOfRange(fraction));
        }
        let (min, max) = (self.min as f64, self.max as f64);
        Ok((min + fraction / 100.0 * (max - min)).min(max))
    }
}
