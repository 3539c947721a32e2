//! Console output for snapshots and sweeps.

use colored::Colorize;

use super::describe::{describe_edge, describe_node};
use crate::engine::SnapshotResponse;
use crate::graph::snapshot::{AggregatedEdge, Snapshot, SnapshotNode};

/// Prints nodes, edges and highlight flags of one snapshot.
pub fn print_snapshot(resp: &SnapshotResponse) {
    let snap = &resp.snapshot;
    println!(
        "{} cutoff {} (range {}..{})",
        "Snapshot".bold(),
        snap.cutoff.to_string().cyan(),
        resp.global_min_timestamp,
        resp.global_max_timestamp
    );
    if let Some(focal) = &snap.focal {
        println!("  focal: {}", focal.yellow());
    }

    println!("{}", format!("Nodes ({})", snap.nodes.len()).bold());
    for node in &snap.nodes {
        print_node_row(node);
    }

    println!("{}", format!("Edges ({})", snap.edges.len()).bold());
    for edge in &snap.edges {
        print_edge_row(snap, edge);
    }
}

fn print_node_row(node: &SnapshotNode) {
    let marker = if node.on_path { "*".red().to_string() } else { " ".to_string() };
    let name = node.account.label();
    if node.is_core() {
        println!("  {marker} {} {}", name.green().bold(), "[core]".green());
    } else {
        println!(
            "  {marker} {:<24} deg {:.4}  btw {:.4}  core-links {}",
            name,
            node.metrics.degree,
            node.metrics.betweenness,
            node.connected_core_nodes
        );
    }
}

fn print_edge_row(snap: &Snapshot, edge: &AggregatedEdge) {
    let row = format!(
        "  {} -- {}  w={} t={:.2}",
        label(snap, &edge.source),
        label(snap, &edge.target),
        edge.weight,
        edge.thickness
    );
    if edge.edge_to_core {
        println!("{}", row.red());
    } else {
        println!("{}", row.dimmed());
    }
}

fn label<'a>(snap: &'a Snapshot, id: &'a str) -> &'a str {
    snap.node(id).map_or(id, |n| n.account.label())
}

/// Prints a detailed inspection block.
pub fn print_lines(lines: &[String]) {
    let mut iter = lines.iter();
    if let Some(head) = iter.next() {
        println!("{}", head.bold());
    }
    for line in iter {
        println!("{line}");
    }
}

pub fn print_node(node: &SnapshotNode) {
    print_lines(&describe_node(node));
}

pub fn print_edge(snap: &Snapshot, edge: &AggregatedEdge) {
    print_lines(&describe_edge(snap, edge));
}

/// One row per sweep step: fraction, cutoff, sizes and path count.
pub fn print_sweep_row(fraction: f64, resp: &SnapshotResponse) {
    let snap = &resp.snapshot;
    let spot = snap.edges.iter().filter(|e| e.edge_to_core).count();
    println!(
        "{:>6.1}%  cutoff {:<12} nodes {:<4} edges {:<4} spotlight {}",
        fraction,
        snap.cutoff,
        snap.nodes.len(),
        snap.edges.len(),
        spot.to_string().red()
    );
}
