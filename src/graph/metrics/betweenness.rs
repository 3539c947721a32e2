// src/graph/metrics/betweenness.rs
//! Brandes betweenness centrality for unweighted undirected graphs.
//!
//! Every edge costs one hop regardless of its aggregated weight. Scores are
//! normalized by (n - 1)(n - 2), which for an undirected graph equals the
//! fraction of node pairs whose shortest paths pass through the node.

use std::collections::VecDeque;

use crate::graph::projection::Projection;

/// Per-source BFS bookkeeping, reused across sources.
struct Workspace {
    stack: Vec<usize>,
    preds: Vec<Vec<usize>>,
    sigma: Vec<f64>,
    dist: Vec<Option<usize>>,
    delta: Vec<f64>,
    queue: VecDeque<usize>,
}

impl Workspace {
    fn new(n: usize) -> Self {
        Self {
            stack: Vec::with_capacity(n),
            preds: vec![Vec::new(); n],
            sigma: vec![0.0; n],
            dist: vec![None; n],
            delta: vec![0.0; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.queue.clear();
        self.preds.iter_mut().for_each(Vec::clear);
        self.sigma.iter_mut().for_each(|s| *s = 0.0);
        self.dist.iter_mut().for_each(|d| *d = None);
        self.delta.iter_mut().for_each(|d| *d = 0.0);
    }
}

/// Normalized betweenness per node index. All zeros when n <= 2.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::indexing_slicing)] // indices come from the projection
pub fn betweenness_centrality(graph: &Projection) -> Vec<f64> {
    let n = graph.len();
    let mut scores = vec![0.0; n];
    if n <= 2 {
        return scores;
    }

    let mut ws = Workspace::new(n);
    for s in 0..n {
        ws.reset();
        shortest_path_counts(graph, s, &mut ws);
        accumulate(s, &mut ws, &mut scores);
    }

    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    for v in &mut scores {
        *v *= scale;
    }
    scores
}

#[allow(clippy::indexing_slicing)]
fn shortest_path_counts(graph: &Projection, s: usize, ws: &mut Workspace) {
    ws.sigma[s] = 1.0;
    ws.dist[s] = Some(0);
    ws.queue.push_back(s);

    while let Some(v) = ws.queue.pop_front() {
        ws.stack.push(v);
        let dv = ws.dist[v].unwrap_or(0);
        for &w in graph.neighbors(v) {
            if ws.dist[w].is_none() {
                ws.dist[w] = Some(dv + 1);
                ws.queue.push_back(w);
            }
            if ws.dist[w] == Some(dv + 1) {
                ws.sigma[w] += ws.sigma[v];
                ws.preds[w].push(v);
            }
        }
    }
}

#[allow(clippy::indexing_slicing)]
fn accumulate(s: usize, ws: &mut Workspace, scores: &mut [f64]) {
    while let Some(w) = ws.stack.pop() {
        let coeff = (1.0 + ws.delta[w]) / ws.sigma[w];
        for i in 0..ws.preds[w].len() {
            let v = ws.preds[w][i];
            ws.delta[v] += ws.sigma[v] * coeff;
        }
        if w != s {
            scores[w] += ws.delta[w];
        }
    }
}
