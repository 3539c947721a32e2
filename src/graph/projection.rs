// src/graph/projection.rs
//! Undirected simple projection of a snapshot, indexed for traversal.

use std::collections::{HashMap, VecDeque};

use super::snapshot::Snapshot;

/// Adjacency lists over dense node indices. Neighbours are sorted and unique,
/// so every traversal visits them in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Projection {
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::from_edges(
            snapshot.node_ids(),
            snapshot.edges.iter().map(|e| e.key()),
        )
    }

    /// Builds from explicit nodes and undirected pairs. Self-loops, duplicate
    /// pairs and pairs naming unknown nodes are ignored.
    pub fn from_edges<'a, N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ids: Vec<String> = nodes.into_iter().map(str::to_string).collect();
        ids.sort();
        ids.dedup();
        let index: HashMap<String, usize> =
            ids.iter().enumerate().map(|(i, id)| (id.clone(), i)).collect();

        let mut adjacency = vec![Vec::new(); ids.len()];
        for (a, b) in edges {
            let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) else {
                continue;
            };
            if i == j {
                continue;
            }
            if let Some(list) = adjacency.get_mut(i) {
                list.push(j);
            }
            if let Some(list) = adjacency.get_mut(j) {
                list.push(i);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }

        Self { ids, index, adjacency }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn id(&self, i: usize) -> Option<&str> {
        self.ids.get(i).map(String::as_str)
    }

    #[must_use]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.adjacency.get(i).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).len()
    }

    /// Unweighted shortest path by BFS, endpoints included.
    #[must_use]
    pub fn shortest_path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.len() || to >= self.len() {
            return None;
        }
        let mut parent: Vec<Option<usize>> = vec![None; self.len()];
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([from]);
        if let Some(s) = seen.get_mut(from) {
            *s = true;
        }

        while let Some(v) = queue.pop_front() {
            if v == to {
                return Some(self.unwind(&parent, to));
            }
            for &w in self.neighbors(v) {
                if let Some(s) = seen.get_mut(w) {
                    if !*s {
                        *s = true;
                        if let Some(p) = parent.get_mut(w) {
                            *p = Some(v);
                        }
                        queue.push_back(w);
                    }
                }
            }
        }
        None
    }

    fn unwind(&self, parent: &[Option<usize>], to: usize) -> Vec<usize> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(Some(p)) = parent.get(cur) {
            path.push(*p);
            cur = *p;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Projection {
        Projection::from_edges(
            ["a", "b", "c", "d", "lonely"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("b", "a"), ("d", "d")],
        )
    }

    #[test]
    fn test_duplicates_and_loops_collapse() {
        let p = chain();
        let b = p.index_of("b").unwrap_or(usize::MAX);
        let d = p.index_of("d").unwrap_or(usize::MAX);
        assert_eq!(p.degree(b), 2);
        assert_eq!(p.degree(d), 1);
    }

    #[test]
    fn test_shortest_path_endpoints_included() {
        let p = chain();
        let (a, d) = (p.index_of("a"), p.index_of("d"));
        let path = a.zip(d).and_then(|(a, d)| p.shortest_path(a, d));
        let names: Option<Vec<&str>> =
            path.map(|v| v.into_iter().filter_map(|i| p.id(i)).collect());
        assert_eq!(names, Some(vec!["a", "b", "c", "d"]));
    }

    #[test]
    fn test_no_path_to_isolated_node() {
        let p = chain();
        let (a, l) = (p.index_of("a"), p.index_of("lonely"));
        assert!(a.zip(l).and_then(|(a, l)| p.shortest_path(a, l)).is_none());
    }

    #[test]
    fn test_path_to_self() {
        let p = chain();
        let c = p.index_of("c").unwrap_or(usize::MAX);
        assert_eq!(p.shortest_path(c, c), Some(vec![c]));
    }
}
