use clap::Parser;
use colored::Colorize;
use snapgraph_core::cli::{self, Cli};
use snapgraph_core::exit::SnapgraphExit;
use tracing_subscriber::EnvFilter;

fn main() -> SnapgraphExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(SnapgraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            SnapgraphExit::for_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "snapgraph_core=debug" } else { "snapgraph_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
