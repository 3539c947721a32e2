// src/graph/snapshot/builder.rs
//! Projects the filtered graph at a cutoff into an aggregated simple graph.

use tracing::debug;

use super::aggregate::{aggregate, apply_thickness, qualifying};
use super::types::{Snapshot, SnapshotNode};
use crate::config::ThicknessConfig;
use crate::graph::store::FullGraph;
use crate::types::{Account, CoreSet, Cutoff};

/// Builds the unannotated snapshot: nodes, edges, weights and thickness.
///
/// A cutoff at or before the graph's earliest event yields the core nodes only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build(
    graph: &FullGraph,
    core: &CoreSet,
    cutoff: Cutoff,
    thickness: &ThicknessConfig,
) -> Snapshot {
    let bounds = graph.time_bounds();
    let mut agg = aggregate(qualifying(graph.events(), cutoff));

    if cutoff <= bounds.min as f64 {
        agg.active.clear();
        agg.edges.clear();
    }
    agg.active.extend(core.iter().map(str::to_string));
    apply_thickness(agg.edges.values_mut(), thickness);

    let edges: Vec<_> = agg.edges.into_values().collect();
    let nodes: Vec<_> = agg
        .active
        .into_iter()
        .map(|id| {
            let mut account = graph
                .account(&id)
                .cloned()
                .unwrap_or_else(|| Account::bare(id.as_str()));
            account.is_core = core.contains(&id);
            let mut node = SnapshotNode::new(account);
            node.connected_core_nodes = edges
                .iter()
                .filter_map(|e| e.other(&id))
                .filter(|other| core.contains(other))
                .count();
            node
        })
        .collect();

    debug!(
        cutoff,
        nodes = nodes.len(),
        edges = edges.len(),
        "snapshot aggregated"
    );

    Snapshot {
        cutoff,
        focal: None,
        nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::InteractionEvent;

    fn graph() -> FullGraph {
        let events = vec![
            InteractionEvent::new("B", "A", 1, "X"),
            InteractionEvent::new("C", "A", 2, "X"),
            InteractionEvent::new("C", "B", 3, "X"),
            InteractionEvent::new("D", "C", 4, "X"),
        ];
        FullGraph::new(vec![], events)
    }

    #[test]
    fn test_min_cutoff_is_core_only() -> Result<()> {
        let core = CoreSet::parse("A")?;
        let snap = build(&graph(), &core, 1.0, &ThicknessConfig::default());
        assert_eq!(snap.node_ids().collect::<Vec<_>>(), vec!["A"]);
        assert!(snap.edges.is_empty());
        Ok(())
    }

    #[test]
    fn test_full_cutoff_has_all_pairs() -> Result<()> {
        let core = CoreSet::parse("A")?;
        let snap = build(&graph(), &core, 4.0, &ThicknessConfig::default());
        assert_eq!(snap.nodes.len(), 4);
        assert_eq!(snap.edges.len(), 4);
        assert!(snap.edge("D", "C").is_some());
        assert_eq!(snap.node("C").map(|n| n.connected_core_nodes), Some(1));
        assert_eq!(snap.node("D").map(|n| n.connected_core_nodes), Some(0));
        Ok(())
    }

    #[test]
    fn test_core_without_events_still_present() -> Result<()> {
        let core = CoreSet::parse("A,Q")?;
        let snap = build(&graph(), &core, 3.0, &ThicknessConfig::default());
        assert!(snap.node("Q").is_some_and(SnapshotNode::is_core));
        assert!(!snap.contains("D"));
        Ok(())
    }

    #[test]
    fn test_cutoff_just_past_min_shows_earliest_edges() -> Result<()> {
        let core = CoreSet::parse("A")?;
        let events = vec![
            InteractionEvent::new("B", "A", 0, "X"),
            InteractionEvent::new("C", "A", 100, "X"),
        ];
        let graph = FullGraph::new(vec![], events);
        let snap = build(&graph, &core, 0.5, &ThicknessConfig::default());
        assert_eq!(snap.node_ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(snap.edge("A", "B").is_some());

        let at_min = build(&graph, &core, 0.0, &ThicknessConfig::default());
        assert!(at_min.edges.is_empty());
        Ok(())
    }
}
