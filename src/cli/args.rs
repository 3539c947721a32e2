use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snapgraph", version, about = "Time-sliced interaction graph snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./snapgraph.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Where the graph comes from and which accounts are core.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON graph dump: { "accounts": [...], "events": [...] }
    #[arg(long, value_name = "FILE")]
    pub graph: PathBuf,
    /// Comma separated core account ids
    #[arg(long, value_name = "IDS")]
    pub core: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build one snapshot at a slider position
    Snapshot {
        #[command(flatten)]
        source: GraphArgs,
        /// Slider position, 0..=100
        #[arg(long, default_value = "100")]
        at: f64,
        /// Highlight shortest paths from this account to every core account
        #[arg(long)]
        focal: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the filtered graph's time bounds
    Bounds {
        #[command(flatten)]
        source: GraphArgs,
        #[arg(long)]
        json: bool,
    },
    /// Build snapshots at evenly spaced positions in parallel
    Sweep {
        #[command(flatten)]
        source: GraphArgs,
        #[arg(long, default_value = "10")]
        steps: usize,
        #[arg(long)]
        json: bool,
    },
    /// Describe one node or edge of a snapshot
    Inspect {
        #[command(flatten)]
        source: GraphArgs,
        #[arg(long, default_value = "100")]
        at: f64,
        #[arg(long, conflicts_with = "edge")]
        node: Option<String>,
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        edge: Option<Vec<String>>,
    },
}
