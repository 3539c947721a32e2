// src/graph/metrics/mod.rs
//! Degree and betweenness centrality over a snapshot's simple projection.
//!
//! Metrics are computed for every node alike; hiding them for core nodes is
//! a presentation concern.

pub mod betweenness;
pub mod degree;

pub use betweenness::betweenness_centrality;
pub use degree::degree_centrality;

use tracing::debug;

use super::projection::Projection;
use super::snapshot::{NodeMetrics, Snapshot};

/// Writes degree, betweenness and relative betweenness onto every node.
pub fn annotate(snapshot: &mut Snapshot, projection: &Projection) {
    let degree = degree_centrality(projection);
    let betweenness = betweenness_centrality(projection);
    let max_betweenness = betweenness.iter().copied().fold(0.0_f64, f64::max);

    for node in &mut snapshot.nodes {
        let Some(i) = projection.index_of(node.id()) else {
            continue;
        };
        let metrics = NodeMetrics {
            degree: degree.get(i).copied().unwrap_or(0.0),
            betweenness: betweenness.get(i).copied().unwrap_or(0.0),
        };
        node.relative_betweenness = if max_betweenness > 0.0 {
            metrics.betweenness / max_betweenness
        } else {
            0.0
        };
        node.metrics = metrics;
    }

    debug!(nodes = projection.len(), max_betweenness, "centrality computed");
}
