// src/graph/spotlight.rs
//! Default highlighting: edges from the currently best-connected non-core
//! nodes to the core set.

use std::collections::HashSet;

use tracing::debug;

use super::normalize::linear_rescale;
use super::rank::strength;
use super::snapshot::aggregate::qualifying;
use super::snapshot::Snapshot;
use super::store::FullGraph;
use crate::config::SpotlightConfig;
use crate::types::{CoreSet, Cutoff, TimeBounds};

/// How many top nodes to spotlight at `cutoff`. Grows with time.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn spotlight_count(cutoff: Cutoff, bounds: TimeBounds, config: &SpotlightConfig) -> usize {
    let raw = linear_rescale(
        cutoff,
        bounds.min as f64,
        bounds.max as f64,
        config.min_count as f64,
        config.max_count as f64,
    )
    .floor();
    raw.clamp(0.0, config.max_count as f64) as usize
}

/// Connection ranking restricted to the snapshot's nodes and qualifying events.
#[must_use]
pub fn local_ranking(graph: &FullGraph, snapshot: &Snapshot, core: &CoreSet) -> Vec<(String, u64)> {
    let active: HashSet<&str> = snapshot.node_ids().collect();
    let events = qualifying(graph.events(), snapshot.cutoff)
        .filter(|e| active.contains(e.source.as_str()) && active.contains(e.target.as_str()));
    let strengths = strength::compute(snapshot.node_ids(), events, core);
    strength::ranked(&strengths)
}

/// Flags every edge joining one of the top `count` ranked nodes to a core node.
/// All other edges are reset to unflagged.
pub fn apply(snapshot: &mut Snapshot, ranking: &[(String, u64)], count: usize, core: &CoreSet) {
    let top: HashSet<&str> = ranking.iter().take(count).map(|(id, _)| id.as_str()).collect();
    for edge in &mut snapshot.edges {
        edge.edge_to_core = (top.contains(edge.source.as_str()) && core.contains(&edge.target))
            || (top.contains(edge.target.as_str()) && core.contains(&edge.source));
    }
    debug!(count, spotlit = top.len(), "spotlight applied");
}

/// Local ranking, count and flagging in one step.
pub fn spotlight(
    snapshot: &mut Snapshot,
    graph: &FullGraph,
    core: &CoreSet,
    config: &SpotlightConfig,
) {
    let count = spotlight_count(snapshot.cutoff, graph.time_bounds(), config);
    let ranking = local_ranking(graph, snapshot, core);
    apply(snapshot, &ranking, count, core);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThicknessConfig;
    use crate::error::Result;
    use crate::graph::snapshot;
    use crate::types::InteractionEvent;

    #[test]
    fn test_count_grows_from_one_to_ten() {
        let bounds = TimeBounds { min: 0, max: 90 };
        let cfg = SpotlightConfig::default();
        assert_eq!(spotlight_count(0.0, bounds, &cfg), 1);
        assert_eq!(spotlight_count(45.0, bounds, &cfg), 5);
        assert_eq!(spotlight_count(90.0, bounds, &cfg), 10);
    }

    #[test]
    fn test_count_clamped() {
        let bounds = TimeBounds { min: 0, max: 90 };
        let cfg = SpotlightConfig::default();
        assert_eq!(spotlight_count(1_000.0, bounds, &cfg), 10);
        assert_eq!(spotlight_count(-1_000.0, bounds, &cfg), 0);
    }

    #[test]
    fn test_count_uses_unrounded_cutoff() {
        let bounds = TimeBounds { min: 0, max: 3 };
        let cfg = SpotlightConfig::default();
        assert_eq!(spotlight_count(1.5, bounds, &cfg), 5);
        assert_eq!(spotlight_count(1.0, bounds, &cfg), 4);
    }

    #[test]
    fn test_degenerate_bounds_use_min_count() {
        let bounds = TimeBounds { min: 5, max: 5 };
        assert_eq!(spotlight_count(5.0, bounds, &SpotlightConfig::default()), 1);
    }

    #[test]
    fn test_only_top_nodes_link_to_core() -> Result<()> {
        let core = CoreSet::parse("A")?;
        let events = vec![
            InteractionEvent::new("X", "A", 1, "X"),
            InteractionEvent::new("X", "A", 2, "X"),
            InteractionEvent::new("Y", "A", 3, "X"),
            InteractionEvent::new("X", "Y", 4, "X"),
        ];
        let graph = FullGraph::new(vec![], events).with_core(&core);
        let mut snap = snapshot::build(&graph, &core, 4.0, &ThicknessConfig::default());
        let ranking = local_ranking(&graph, &snap, &core);
        assert_eq!(ranking.first().map(|(id, s)| (id.as_str(), *s)), Some(("X", 2)));

        apply(&mut snap, &ranking, 1, &core);
        assert_eq!(snap.edge("X", "A").map(|e| e.edge_to_core), Some(true));
        assert_eq!(snap.edge("Y", "A").map(|e| e.edge_to_core), Some(false));
        assert_eq!(snap.edge("X", "Y").map(|e| e.edge_to_core), Some(false));
        Ok(())
    }

    #[test]
    fn test_local_ranking_ignores_future_events() -> Result<()> {
        let core = CoreSet::parse("A")?;
        let events = vec![
            InteractionEvent::new("Y", "A", 1, "X"),
            InteractionEvent::new("X", "A", 2, "X"),
            InteractionEvent::new("X", "A", 8, "X"),
            InteractionEvent::new("X", "A", 9, "X"),
        ];
        let graph = FullGraph::new(vec![], events).with_core(&core);
        let snap = snapshot::build(&graph, &core, 2.0, &ThicknessConfig::default());
        let ranking = local_ranking(&graph, &snap, &core);
        assert_eq!(ranking, vec![("X".to_string(), 1), ("Y".to_string(), 1)]);
        Ok(())
    }
}
