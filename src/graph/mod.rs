// src/graph/mod.rs
//! Graph store and the per-snapshot algorithms that run over it.

pub mod highlight;
pub mod metrics;
pub mod normalize;
pub mod projection;
pub mod rank;
pub mod snapshot;
pub mod spotlight;
pub mod store;

pub use normalize::linear_rescale;
pub use projection::Projection;
pub use snapshot::{AggregatedEdge, NodeMetrics, Snapshot, SnapshotNode};
pub use store::FullGraph;
