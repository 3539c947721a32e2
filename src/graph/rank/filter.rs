// src/graph/rank/filter.rs
//! Global filter: keep the core set plus the best-connected non-core nodes.

use std::collections::HashSet;

use tracing::debug;

use super::strength;
use crate::graph::store::FullGraph;
use crate::types::CoreSet;

/// Reduces `graph` to the core nodes plus the `top_k` strongest non-core nodes.
///
/// Core ids missing from `graph` are kept as isolated core accounts.
#[must_use]
pub fn global_filter(graph: &FullGraph, core: &CoreSet, top_k: usize) -> FullGraph {
    let marked = graph.clone().with_core(core);
    let strengths = strength::compute(
        marked.accounts().map(|a| a.id.as_str()),
        marked.events(),
        core,
    );
    let ranking = strength::ranked(&strengths);

    let mut keep: HashSet<&str> = core.iter().collect();
    keep.extend(ranking.iter().take(top_k).map(|(id, _)| id.as_str()));

    debug!(
        candidates = ranking.len(),
        kept = keep.len(),
        top_k,
        "global connection filter"
    );
    marked.retain(&keep)
}
