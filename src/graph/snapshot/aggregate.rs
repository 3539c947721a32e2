// src/graph/snapshot/aggregate.rs
//! Temporal aggregation of raw events into one edge per unordered pair.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{AggregatedEdge, PairKey};
use crate::config::ThicknessConfig;
use crate::graph::normalize::linear_rescale;
use crate::types::{Cutoff, InteractionEvent};

/// Active endpoints and merged edges of the events at or before a cutoff.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub active: BTreeSet<String>,
    pub edges: BTreeMap<PairKey, AggregatedEdge>,
}

/// Events with `timestamp <= cutoff`.
#[allow(clippy::cast_precision_loss)]
pub fn qualifying<'a>(
    events: &'a [InteractionEvent],
    cutoff: Cutoff,
) -> impl Iterator<Item = &'a InteractionEvent> + Clone {
    events.iter().filter(move |e| e.timestamp as f64 <= cutoff)
}

/// Merges qualifying events by canonical pair. Self-loops activate their
/// node but never produce an edge.
pub fn aggregate<'a, I>(events: I) -> Aggregation
where
    I: IntoIterator<Item = &'a InteractionEvent>,
{
    let mut agg = Aggregation::default();
    for event in events {
        agg.active.insert(event.source.clone());
        agg.active.insert(event.target.clone());

        let Some(key) = PairKey::new(&event.source, &event.target) else {
            continue;
        };
        agg.edges
            .entry(key)
            .or_insert_with_key(AggregatedEdge::empty)
            .record(&event.source, &event.edge_type);
    }
    agg
}

/// Sets each edge's thickness from its weight relative to the heaviest edge.
#[allow(clippy::cast_precision_loss)]
pub fn apply_thickness<'a, I>(edges: I, range: &ThicknessConfig)
where
    I: IntoIterator<Item = &'a mut AggregatedEdge>,
{
    let mut edges: Vec<&mut AggregatedEdge> = edges.into_iter().collect();
    let Some(max_weight) = edges.iter().map(|e| e.weight).max() else {
        return;
    };
    for edge in &mut edges {
        edge.thickness = linear_rescale(
            edge.weight as f64,
            1.0,
            max_weight as f64,
            range.min,
            range.max,
        );
    }
}
