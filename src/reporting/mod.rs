// src/reporting/mod.rs
//! Presentation of snapshots: colored console output and text summaries.

pub mod console;
pub mod describe;

pub use describe::{describe_edge, describe_node};
