// src/reporting/describe.rs
//! Plain-text inspection summaries for a single node or edge.

use crate::graph::snapshot::{AggregatedEdge, Snapshot, SnapshotNode};

pub(crate) fn pluralize(word: &str, count: u64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Lines describing a node. Centrality is left out for core nodes.
#[must_use]
pub fn describe_node(node: &SnapshotNode) -> Vec<String> {
    let a = &node.account;
    let mut lines = vec![
        format!("User: {}", a.label()),
        format!("FID: {}", a.id),
        format!(
            "Display Name: {}",
            if a.username.is_empty() { "N/A" } else { a.username.as_str() }
        ),
        format!("Followers: {}", a.follower_count),
        format!("Following: {}", a.following_count),
        format!("Connected Core Nodes: {}", node.connected_core_nodes),
    ];
    if !node.is_core() {
        lines.push(format!("Centrality: {:.4}", node.metrics.degree));
        lines.push(format!("Betweenness: {:.4}", node.metrics.betweenness));
    }
    lines
}

/// Lines describing an edge: totals, then each endpoint's initiated breakdown.
#[must_use]
pub fn describe_edge(snapshot: &Snapshot, edge: &AggregatedEdge) -> Vec<String> {
    let label = |id: &str| {
        snapshot
            .node(id)
            .map_or_else(|| id.to_string(), |n| n.account.label().to_string())
    };

    let mut lines = vec![
        format!("Edge: {} <-> {}", label(&edge.source), label(&edge.target)),
        format!("Total Interactions: {}", edge.weight),
    ];

    for id in [&edge.source, &edge.target] {
        let name = label(id);
        lines.push(format!("Username {name}:"));
        lines.push(format!(
            "{} {} initiated by {name}",
            edge.initiated_by(id),
            pluralize("interaction", edge.initiated_by(id))
        ));
        if let Some(types) = edge.interactions.get(id.as_str()) {
            for (kind, count) in types {
                lines.push(format!(
                    "  - {count} {}",
                    pluralize(&kind.to_lowercase(), *count)
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThicknessConfig;
    use crate::error::Result;
    use crate::graph::snapshot;
    use crate::graph::store::FullGraph;
    use crate::types::{Account, CoreSet, InteractionEvent};

    fn snap() -> Result<Snapshot> {
        let core = CoreSet::parse("1")?;
        let mut alice = Account::bare("1");
        alice.username = "alice".into();
        let events = vec![
            InteractionEvent::new("2", "1", 1, "LIKE"),
            InteractionEvent::new("2", "1", 2, "LIKE"),
            InteractionEvent::new("1", "2", 3, "REPLY"),
        ];
        let g = FullGraph::new(vec![alice], events).with_core(&core);
        Ok(snapshot::build(&g, &core, 3.0, &ThicknessConfig::default()))
    }

    #[test]
    fn test_edge_summary_breakdown() -> Result<()> {
        let s = snap()?;
        let edge = s.edge("1", "2").expect("edge 1-2 present");
        let lines = describe_edge(&s, edge);
        assert_eq!(lines[0], "Edge: alice <-> 2");
        assert_eq!(lines[1], "Total Interactions: 3");
        assert!(lines.contains(&"1 interaction initiated by alice".to_string()));
        assert!(lines.contains(&"2 interactions initiated by 2".to_string()));
        assert!(lines.contains(&"  - 2 likes".to_string()));
        assert!(lines.contains(&"  - 1 reply".to_string()));
        Ok(())
    }

    #[test]
    fn test_core_node_hides_centrality() -> Result<()> {
        let s = snap()?;
        let core_lines = s.node("1").map(describe_node).unwrap_or_default();
        let other_lines = s.node("2").map(describe_node).unwrap_or_default();
        assert!(core_lines.iter().all(|l| !l.starts_with("Betweenness")));
        assert!(other_lines.iter().any(|l| l.starts_with("Betweenness")));
        assert!(other_lines.contains(&"Display Name: N/A".to_string()));
        Ok(())
    }
}
