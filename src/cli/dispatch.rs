//! Command dispatch logic extracted from binary to reduce main function size.

use std::path::Path;

use super::args::Commands;
use super::handlers::{handle_bounds, handle_inspect, handle_snapshot, handle_sweep};
use crate::exit::SnapgraphExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: Option<&Path>) -> Result<SnapgraphExit> {
    match command {
        Commands::Snapshot {
            source,
            at,
            focal,
            json,
        } => handle_snapshot(config, &source, at, focal.as_deref(), json),
        Commands::Bounds { source, json } => handle_bounds(config, &source, json),
        Commands::Sweep {
            source,
            steps,
            json,
        } => handle_sweep(config, &source, steps, json),
        Commands::Inspect {
            source,
            at,
            node,
            edge,
        } => handle_inspect(config, &source, at, node.as_deref(), edge.as_deref()),
    }
}
