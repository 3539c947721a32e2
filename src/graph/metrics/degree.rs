// src/graph/metrics/degree.rs
use crate::graph::projection::Projection;

/// Degree centrality: degree / (n - 1). All zeros when n < 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &Projection) -> Vec<f64> {
    let n = graph.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n).map(|i| graph.degree(i) as f64 * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_center_is_one() {
        let g = Projection::from_edges(["c", "x", "y", "z"], [("c", "x"), ("c", "y"), ("c", "z")]);
        let d = degree_centrality(&g);
        let c = g.index_of("c").unwrap_or(0);
        assert!((d[c] - 1.0).abs() < 1e-9);
        assert!(d.iter().filter(|v| (**v - 1.0 / 3.0).abs() < 1e-9).count() == 3);
    }

    #[test]
    fn test_single_node_is_zero() {
        let g = Projection::from_edges(["solo"], []);
        assert_eq!(degree_centrality(&g), vec![0.0]);
    }
}
