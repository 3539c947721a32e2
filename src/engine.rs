// src/engine.rs
//! Request/response entry point: one pure pipeline per snapshot query.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::projection::Projection;
use crate::graph::snapshot::{self, Snapshot};
use crate::graph::store::FullGraph;
use crate::graph::{highlight, metrics, rank, spotlight};
use crate::types::{CoreSet, Cutoff, Timestamp};

/// A front-end query for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRequest {
    pub core_node_ids: Vec<String>,
    /// Slider position in `[0, 100]` across the filtered graph's time span.
    pub cutoff_fraction: f64,
    #[serde(default)]
    pub focal_node_id: Option<String>,
}

impl SnapshotRequest {
    #[must_use]
    pub fn new(core: &CoreSet, cutoff_fraction: f64, focal: Option<&str>) -> Self {
        Self {
            core_node_ids: core.as_slice().to_vec(),
            cutoff_fraction,
            focal_node_id: focal.map(str::to_string),
        }
    }
}

/// The annotated snapshot plus the bounds used to map fractions to cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub snapshot: Snapshot,
    pub global_min_timestamp: Timestamp,
    pub global_max_timestamp: Timestamp,
}

/// Stateless snapshot builder. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Global filter: core nodes plus the `top_k` best-connected others.
    #[must_use]
    pub fn filter(&self, raw: &FullGraph, core: &CoreSet) -> FullGraph {
        let filtered = rank::global_filter(raw, core, self.config.ranking.top_k);
        info!(
            before = raw.account_count(),
            after = filtered.account_count(),
            events = filtered.events().len(),
            "graph filtered to core neighbourhood"
        );
        filtered
    }

    /// Full pipeline at an explicit cutoff over an already filtered graph.
    #[must_use]
    pub fn snapshot_at(
        &self,
        graph: &FullGraph,
        core: &CoreSet,
        cutoff: Cutoff,
        focal: Option<&str>,
    ) -> Snapshot {
        let mut snap = snapshot::build(graph, core, cutoff, &self.config.thickness);
        let projection = Projection::from_snapshot(&snap);

        metrics::annotate(&mut snap, &projection);
        spotlight::spotlight(&mut snap, graph, core, &self.config.spotlight);
        if let Some(focal) = focal {
            highlight::highlight(&mut snap, &projection, focal, core);
        }
        snap
    }

    /// Answers a request against an already filtered graph.
    ///
    /// # Errors
    /// Returns `InvalidCoreSet` for an empty core list and `CutoffOutOfRange`
    /// for a fraction outside `[0, 100]`.
    pub fn build(&self, graph: &FullGraph, request: &SnapshotRequest) -> Result<SnapshotResponse> {
        let core = CoreSet::new(&request.core_node_ids)?;
        let bounds = graph.time_bounds();
        let cutoff = bounds.cutoff_for_fraction(request.cutoff_fraction)?;
        debug!(
            fraction = request.cutoff_fraction,
            cutoff,
            focal = request.focal_node_id.as_deref(),
            "building snapshot"
        );

        let snapshot = self.snapshot_at(graph, &core, cutoff, request.focal_node_id.as_deref());
        Ok(SnapshotResponse {
            snapshot,
            global_min_timestamp: bounds.min,
            global_max_timestamp: bounds.max,
        })
    }

    /// Filters a raw graph for the request's core set, then builds.
    ///
    /// # Errors
    /// Same as [`Engine::build`].
    pub fn query(&self, raw: &FullGraph, request: &SnapshotRequest) -> Result<SnapshotResponse> {
        let core = CoreSet::new(&request.core_node_ids)?;
        let filtered = self.filter(raw, &core);
        self.build(&filtered, request)
    }

    /// Builds independent requests in parallel, preserving input order.
    #[must_use]
    pub fn build_many(
        &self,
        graph: &FullGraph,
        requests: &[SnapshotRequest],
    ) -> Vec<Result<SnapshotResponse>> {
        requests.par_iter().map(|r| self.build(graph, r)).collect()
    }
}
