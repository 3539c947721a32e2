// src/cli/handlers.rs
//! Command handlers: load, filter, build, print.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::GraphArgs;
use crate::config::EngineConfig;
use crate::engine::{Engine, SnapshotRequest};
use crate::exit::SnapgraphExit;
use crate::graph::store::FullGraph;
use crate::reporting::console;
use crate::source::{JsonFileSource, SourceProvider};
use crate::types::CoreSet;

/// Everything a handler needs after loading.
pub struct Loaded {
    pub engine: Engine,
    pub core: CoreSet,
    pub graph: FullGraph,
}

/// Reads config and graph, then applies the global filter.
///
/// # Errors
/// Returns error if config or graph loading fails, or the core list is empty.
pub fn load(config: Option<&Path>, args: &GraphArgs) -> Result<Loaded> {
    let engine_config = match config {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::load()?,
    };
    let core = CoreSet::parse(&args.core)?;
    let raw = JsonFileSource::new(&args.graph)
        .fetch(&core)
        .with_context(|| format!("reading graph {}", args.graph.display()))?;

    let engine = Engine::new(engine_config);
    let graph = engine.filter(&raw, &core);
    Ok(Loaded { engine, core, graph })
}

/// # Errors
/// Returns error if loading or the build fails.
pub fn handle_snapshot(
    config: Option<&Path>,
    args: &GraphArgs,
    at: f64,
    focal: Option<&str>,
    json: bool,
) -> Result<SnapgraphExit> {
    let loaded = load(config, args)?;
    let request = SnapshotRequest::new(&loaded.core, at, focal);
    let response = loaded.engine.build(&loaded.graph, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        console::print_snapshot(&response);
    }
    Ok(SnapgraphExit::Success)
}

/// # Errors
/// Returns error if loading fails.
pub fn handle_bounds(config: Option<&Path>, args: &GraphArgs, json: bool) -> Result<SnapgraphExit> {
    let loaded = load(config, args)?;
    let bounds = loaded.graph.time_bounds();
    if json {
        println!("{}", serde_json::to_string(&bounds)?);
    } else {
        println!("min {}  max {}", bounds.min, bounds.max);
    }
    Ok(SnapgraphExit::Success)
}

/// # Errors
/// Returns error if loading or any step's build fails.
#[allow(clippy::cast_precision_loss)]
pub fn handle_sweep(
    config: Option<&Path>,
    args: &GraphArgs,
    steps: usize,
    json: bool,
) -> Result<SnapgraphExit> {
    let loaded = load(config, args)?;
    let steps = steps.max(1);
    let fractions: Vec<f64> = (0..=steps)
        .map(|i| i as f64 * 100.0 / steps as f64)
        .collect();
    let requests: Vec<_> = fractions
        .iter()
        .map(|f| SnapshotRequest::new(&loaded.core, *f, None))
        .collect();

    let responses = loaded
        .engine
        .build_many(&loaded.graph, &requests)
        .into_iter()
        .collect::<crate::error::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
    } else {
        for (fraction, resp) in fractions.iter().zip(&responses) {
            console::print_sweep_row(*fraction, resp);
        }
    }
    Ok(SnapgraphExit::Success)
}

/// # Errors
/// Returns error if loading or the build fails.
pub fn handle_inspect(
    config: Option<&Path>,
    args: &GraphArgs,
    at: f64,
    node: Option<&str>,
    edge: Option<&[String]>,
) -> Result<SnapgraphExit> {
    let loaded = load(config, args)?;
    let request = SnapshotRequest::new(&loaded.core, at, None);
    let snap = loaded.engine.build(&loaded.graph, &request)?.snapshot;

    if let Some(id) = node {
        return Ok(match snap.node(id) {
            Some(n) => {
                console::print_node(n);
                SnapgraphExit::Success
            }
            None => not_found(&format!("node {id}")),
        });
    }
    if let Some([a, b]) = edge {
        return Ok(match snap.edge(a, b) {
            Some(e) => {
                console::print_edge(&snap, e);
                SnapgraphExit::Success
            }
            None => not_found(&format!("edge {a} -- {b}")),
        });
    }

    eprintln!("{}", "Nothing to inspect: pass --node or --edge".yellow());
    Ok(SnapgraphExit::InvalidInput)
}

fn not_found(what: &str) -> SnapgraphExit {
    eprintln!("{} {what} is not in the snapshot", "Not found:".red());
    SnapgraphExit::InvalidInput
}
