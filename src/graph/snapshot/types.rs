// src/graph/snapshot/types.rs
//! Derived, per-cutoff graph records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Account, Cutoff};

/// Event counts per edge type label.
pub type TypeHistogram = BTreeMap<String, u64>;

/// Canonical unordered pair of distinct ids, smaller id first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PairKey {
    pub a: String,
    pub b: String,
}

impl PairKey {
    /// Returns `None` for self-pairs.
    #[must_use]
    pub fn new(x: &str, y: &str) -> Option<Self> {
        match x.cmp(y) {
            std::cmp::Ordering::Less => Some(Self { a: x.into(), b: y.into() }),
            std::cmp::Ordering::Greater => Some(Self { a: y.into(), b: x.into() }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// All raw events between one unordered pair, up to a cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
    pub edge_types: TypeHistogram,
    /// Initiator id -> per-type counts. Both endpoints are always present.
    pub interactions: BTreeMap<String, TypeHistogram>,
    pub thickness: f64,
    pub edge_to_core: bool,
}

impl AggregatedEdge {
    pub(crate) fn empty(key: &PairKey) -> Self {
        let interactions = [
            (key.a.clone(), TypeHistogram::new()),
            (key.b.clone(), TypeHistogram::new()),
        ]
        .into_iter()
        .collect();
        Self {
            source: key.a.clone(),
            target: key.b.clone(),
            weight: 0,
            edge_types: TypeHistogram::new(),
            interactions,
            thickness: 0.0,
            edge_to_core: false,
        }
    }

    pub(crate) fn record(&mut self, initiator: &str, edge_type: &str) {
        self.weight += 1;
        *self.edge_types.entry(edge_type.to_string()).or_insert(0) += 1;
        *self
            .interactions
            .entry(initiator.to_string())
            .or_default()
            .entry(edge_type.to_string())
            .or_insert(0) += 1;
    }

    /// The opposite endpoint, if `id` is one of the two.
    #[must_use]
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Total events initiated by `id` on this edge.
    #[must_use]
    pub fn initiated_by(&self, id: &str) -> u64 {
        self.interactions
            .get(id)
            .map_or(0, |h| h.values().sum())
    }

    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }
}

/// Centrality values for one node. Both are 0 for degenerate cases.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NodeMetrics {
    pub degree: f64,
    pub betweenness: f64,
}

/// One visible account with its snapshot annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    #[serde(flatten)]
    pub account: Account,
    pub metrics: NodeMetrics,
    /// Betweenness divided by the snapshot maximum (0 if the maximum is 0).
    pub relative_betweenness: f64,
    pub connected_core_nodes: usize,
    pub on_path: bool,
}

impl SnapshotNode {
    pub(crate) fn new(account: Account) -> Self {
        Self {
            account,
            metrics: NodeMetrics::default(),
            relative_betweenness: 0.0,
            connected_core_nodes: 0,
            on_path: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.account.id
    }

    #[must_use]
    pub fn is_core(&self) -> bool {
        self.account.is_core
    }
}

/// The graph visible at one cutoff, with metrics and highlight flags.
///
/// Nodes are sorted by id and edges by canonical pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub cutoff: Cutoff,
    pub focal: Option<String>,
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<AggregatedEdge>,
}

impl Snapshot {
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SnapshotNode> {
        self.nodes
            .binary_search_by(|n| n.id().cmp(id))
            .ok()
            .and_then(|i| self.nodes.get(i))
    }

    /// Looks up the edge between two ids in either order.
    #[must_use]
    pub fn edge(&self, x: &str, y: &str) -> Option<&AggregatedEdge> {
        let key = PairKey::new(x, y)?;
        self.edges
            .iter()
            .find(|e| e.source == key.a && e.target == key.b)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(SnapshotNode::id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_canonical() {
        assert_eq!(PairKey::new("b", "a"), PairKey::new("a", "b"));
        assert!(PairKey::new("a", "a").is_none());
    }

    #[test]
    fn test_record_tracks_initiator() {
        let key = PairKey { a: "a".into(), b: "b".into() };
        let mut edge = AggregatedEdge::empty(&key);
        edge.record("b", "LIKE");
        edge.record("b", "LIKE");
        edge.record("a", "REPLY");
        assert_eq!(edge.weight, 3);
        assert_eq!(edge.initiated_by("b"), 2);
        assert_eq!(edge.initiated_by("a"), 1);
        assert_eq!(edge.edge_types.get("LIKE"), Some(&2));
        assert_eq!(edge.other("a"), Some("b"));
        assert_eq!(edge.other("z"), None);
    }
}
