// src/graph/snapshot/mod.rs
//! Snapshot construction: the graph as it looked at a given cutoff.

pub mod aggregate;
pub mod builder;
pub mod types;

pub use builder::build;
pub use types::{AggregatedEdge, NodeMetrics, PairKey, Snapshot, SnapshotNode, TypeHistogram};
