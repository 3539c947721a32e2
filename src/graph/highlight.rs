// src/graph/highlight.rs
//! Focal-node path highlighting.
//!
//! For each core node, one BFS shortest path from the focal node is found in
//! the snapshot's simple projection. The union of those paths marks nodes as
//! on-path and replaces every edge's `edge_to_core` flag.

use std::collections::HashSet;

use tracing::debug;

use super::projection::Projection;
use super::snapshot::{PairKey, Snapshot};
use crate::types::CoreSet;

/// Nodes and undirected edges lying on some focal-to-core shortest path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathUnion {
    pub nodes: HashSet<String>,
    pub edges: HashSet<PairKey>,
}

/// Collects the path union. Core nodes unreachable from `focal` are skipped;
/// an unknown focal node yields an empty union.
#[must_use]
pub fn path_union(projection: &Projection, focal: &str, core: &CoreSet) -> PathUnion {
    let mut union = PathUnion::default();
    let Some(from) = projection.index_of(focal) else {
        return union;
    };

    for target in core.iter() {
        let Some(to) = projection.index_of(target) else {
            continue;
        };
        let Some(path) = projection.shortest_path(from, to) else {
            continue;
        };
        let names: Vec<&str> = path.iter().filter_map(|&i| projection.id(i)).collect();
        union.nodes.extend(names.iter().map(|s| (*s).to_string()));
        union
            .edges
            .extend(names.windows(2).filter_map(|w| match w {
                [a, b] => PairKey::new(a, b),
                _ => None,
            }));
    }
    union
}

/// Marks on-path nodes and overrides edge flags from the focal node's path union.
pub fn highlight(snapshot: &mut Snapshot, projection: &Projection, focal: &str, core: &CoreSet) {
    let union = path_union(projection, focal, core);

    for node in &mut snapshot.nodes {
        node.on_path = union.nodes.contains(node.id());
    }
    for edge in &mut snapshot.edges {
        edge.edge_to_core = PairKey::new(&edge.source, &edge.target)
            .is_some_and(|k| union.edges.contains(&k));
    }
    snapshot.focal = Some(focal.to_string());

    debug!(
        focal,
        on_path = union.nodes.len(),
        path_edges = union.edges.len(),
        "focal paths highlighted"
    );
}
