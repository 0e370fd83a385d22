// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphtrace CLI - record graph algorithms and replay them step by step

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use graphtrace::algorithms::Algorithm;
use graphtrace::commands::{self, GraphArgs, OutputOptions};
use graphtrace::types::NodeId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHTRACE_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an algorithm over a graph and replay its steps
    Run {
        /// Algorithm: dijkstra, bellman-ford, prim, kruskal
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Start node id (not used by kruskal)
        #[arg(short, long)]
        start: Option<NodeId>,

        #[command(flatten)]
        graph: GraphArgs,

        /// Pause between steps in milliseconds (overrides playback.delay_ms)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Stop after this step (1-based)
        #[arg(long)]
        step: Option<usize>,
    },

    /// Render the graph, or one recorded step, as Graphviz DOT
    Dot {
        #[command(flatten)]
        graph: GraphArgs,

        /// Color nodes and edges by a step of this algorithm
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Start node id for the algorithm
        #[arg(short, long)]
        start: Option<NodeId>,

        /// Step to render (1-based), defaults to the last one
        #[arg(long, requires = "algorithm")]
        step: Option<usize>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// List the available algorithms
    Algorithms,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = graphtrace::config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = OutputOptions {
        json: cli.json,
        color: config.color && !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Run { algorithm, start, graph, delay_ms, step } => commands::run::run(
            commands::run::RunArgs { algorithm, start, graph, delay_ms, step },
            &config,
            output,
        ),
        Commands::Dot { graph, algorithm, start, step, output } => {
            commands::dot::run(commands::dot::DotArgs { graph, algorithm, start, step, output })
        }
        Commands::Algorithms => commands::algorithms::run(output),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
