// src/source.rs
//! The seam to whatever produces raw account and interaction data.
//!
//! Network fetching lives outside this crate; [`JsonFileSource`] reads an
//! offline dump so the CLI and tests have something concrete to load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::store::FullGraph;
use crate::types::{Account, CoreSet, InteractionEvent};

/// Produces a full graph around a set of core accounts.
pub trait SourceProvider {
    /// # Errors
    /// Returns `GraphError::Source` (or I/O errors) when data cannot be obtained.
    fn fetch(&self, core: &CoreSet) -> Result<FullGraph>;
}

/// On-disk layout read by [`JsonFileSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub events: Vec<InteractionEvent>,
}

impl GraphDocument {
    /// Rejects records that cannot be placed in a graph.
    ///
    /// # Errors
    /// Returns `GraphError::Source` for an account or event endpoint with a blank id.
    pub fn validate(&self) -> Result<()> {
        if let Some(a) = self.accounts.iter().find(|a| a.id.trim().is_empty()) {
            return Err(GraphError::Source(format!(
                "account {:?} has a blank id",
                a.username
            )));
        }
        if let Some(i) = self
            .events
            .iter()
            .position(|e| e.source.trim().is_empty() || e.target.trim().is_empty())
        {
            return Err(GraphError::Source(format!("event #{i} has a blank endpoint")));
        }
        Ok(())
    }

    /// Converts into a graph with core flags applied.
    #[must_use]
    pub fn into_graph(self, core: &CoreSet) -> FullGraph {
        FullGraph::new(self.accounts, self.events).with_core(core)
    }
}

/// Reads `{ "accounts": [...], "events": [...] }` from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for JsonFileSource {
    fn fetch(&self, core: &CoreSet) -> Result<FullGraph> {
        let content = fs::read_to_string(&self.path).map_err(|e| GraphError::io(e, &self.path))?;
        let doc: GraphDocument = serde_json::from_str(&content)?;
        doc.validate()?;
        Ok(doc.into_graph(core))
    }
}

/// Serves a prebuilt graph. Handy for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    document: GraphDocument,
}

impl StaticSource {
    #[must_use]
    pub fn new(accounts: Vec<Account>, events: Vec<InteractionEvent>) -> Self {
        Self {
            document: GraphDocument { accounts, events },
        }
    }
}

impl SourceProvider for StaticSource {
    fn fetch(&self, core: &CoreSet) -> Result<FullGraph> {
        Ok(self.document.clone().into_graph(core))
    }
}
