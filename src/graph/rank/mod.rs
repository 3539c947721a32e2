// src/graph/rank/mod.rs
//! Connection ranking of non-core nodes against the core set.
//!
//! Two scopes exist and are computed independently: the global filter over the
//! whole graph, and the local ranking over a single snapshot.

pub mod filter;
pub mod strength;

pub use filter::global_filter;
pub use strength::{ranked, StrengthMap};
