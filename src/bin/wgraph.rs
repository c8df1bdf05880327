//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wavegraph::cli::commands;
use wavegraph::graph::GraphOptions;
use wavegraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wavegraph CLI — components and paths over edge-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Treat edges as one-way
    #[arg(long)]
    directed: bool,

    /// Ignore edge weights (every edge weighs 1)
    #[arg(long)]
    unweighted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency matrix
    Matrix {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Display summary information about a graph
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List connected components
    Components {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Check whether two vertices are connected
    Reachable {
        /// Path to the edge-list file
        file: PathBuf,
        /// First vertex (1-based)
        from: usize,
        /// Second vertex (1-based)
        to: usize,
    },
    /// All fewest-edges paths between two vertices
    Shortest {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex (1-based)
        from: usize,
        /// Destination vertex (1-based)
        to: usize,
    },
    /// Lightest path(s) from a vertex
    Lightest {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex (1-based)
        from: usize,
        /// Destination vertex (1-based); every reachable vertex when omitted
        to: Option<usize>,
    },
    /// Reachable vertices grouped by hop distance
    Hops {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex (1-based)
        from: usize,
    },
    /// Print the wave tree grown from a vertex
    Wave {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex (1-based)
        from: usize,
        /// Stop growing once this vertex (1-based) is reached
        #[arg(long)]
        sink: Option<usize>,
        /// Branch on every shortest route instead of first discovery
        #[arg(long)]
        duplicate: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let options = GraphOptions {
        directed: cli.directed,
        weighted: !cli.unweighted,
    };

    let result = match cli.command {
        Commands::Matrix { file } => commands::cmd_matrix(&file, options),
        Commands::Info { file } => commands::cmd_info(&file, options, json),
        Commands::Components { file } => commands::cmd_components(&file, options, json),
        Commands::Reachable { file, from, to } => {
            commands::cmd_reachable(&file, options, from, to, json)
        }
        Commands::Shortest { file, from, to } => {
            commands::cmd_shortest(&file, options, from, to, json)
        }
        Commands::Lightest { file, from, to } => {
            commands::cmd_lightest(&file, options, from, to, json)
        }
        Commands::Hops { file, from } => commands::cmd_hops(&file, options, from, json),
        Commands::Wave {
            file,
            from,
            sink,
            duplicate,
        } => commands::cmd_wave(&file, options, from, sink, duplicate),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::Truncated { .. } => 2,
            GraphError::VertexOutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
