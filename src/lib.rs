//! Time-sliced snapshots of an account interaction graph.
//!
//! Given the full graph, a core set and a cutoff, [`engine::Engine`] produces
//! an aggregated snapshot annotated with centrality, spotlight edges and,
//! optionally, the shortest paths from a focal account to every core account.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;
pub mod session;
pub mod source;
pub mod types;

pub use engine::{Engine, SnapshotRequest, SnapshotResponse};
pub use error::{GraphError, Result};
pub use graph::{linear_rescale, FullGraph, Snapshot};
pub use types::{Account, CoreSet, Cutoff, InteractionEvent, TimeBounds};
