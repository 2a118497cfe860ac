//! trigraph CLI - analyse knowledge-graph triple files.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trigraph::prelude::MergeStrategy;

use crate::config::{Config, InputFormat};

#[derive(Parser)]
#[command(name = "trigraph")]
#[command(author, version, about = "trigraph - Traverse, partition and prune knowledge-graph triples", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Input layout (overrides trigraph.toml)
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    Json,
    Jsonl,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::Json => InputFormat::Json,
            FormatArg::Jsonl => InputFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Pairwise,
    DisjointSet,
}

impl From<StrategyArg> for MergeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pairwise => MergeStrategy::Pairwise,
            StrategyArg::DisjointSet => MergeStrategy::DisjointSet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default trigraph.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show graph statistics
    Stats {
        /// Triple file
        file: PathBuf,
    },

    /// List connected components, largest first
    Components {
        /// Triple file
        file: PathBuf,

        /// Component merge strategy
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Write all components as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the largest connected component
    Biggest {
        /// Triple file
        file: PathBuf,

        /// Write the component as a triple file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract everything reachable from a root
    Extract {
        /// Triple file
        file: PathBuf,
        /// Root node
        root: String,
    },

    /// List nodes that can reach a node
    Ancestors {
        /// Triple file
        file: PathBuf,
        /// Target node
        node: String,
    },

    /// List nodes reachable from a node
    Descendants {
        /// Triple file
        file: PathBuf,
        /// Source node
        node: String,
    },

    /// Remove leaf layers
    Prune {
        /// Triple file
        file: PathBuf,

        /// Only cut leaves reached through this predicate
        #[arg(short, long)]
        predicate: Option<String>,

        /// Maximum number of layers to peel
        #[arg(short, long)]
        layers: Option<usize>,

        /// Write the remaining triples as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the most central concepts
    Centrality {
        /// Triple file
        file: PathBuf,

        /// Number of top concepts
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Group label values per concept
    Describe {
        /// Triple file
        file: PathBuf,
        /// Predicate carrying the labels (exact match)
        label_predicate: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // init never reads an existing trigraph.toml.
    let mut config = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load()?,
    };
    if let Some(format) = cli.format {
        config.input.format = format.into();
    }

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Stats { file } => commands::stats::run(&file, &config),
        Commands::Components { file, strategy, output } => commands::components::list(
            &file,
            strategy.map(Into::into),
            output.as_deref(),
            &config,
        ),
        Commands::Biggest { file, output } => {
            commands::components::biggest(&file, output.as_deref(), &config)
        }
        Commands::Extract { file, root } => commands::extract::rooted(&file, &root, &config),
        Commands::Ancestors { file, node } => commands::extract::ancestors(&file, &node, &config),
        Commands::Descendants { file, node } => {
            commands::extract::descendants(&file, &node, &config)
        }
        Commands::Prune { file, predicate, layers, output } => commands::prune::run(
            &file,
            predicate.as_deref(),
            layers,
            output.as_deref(),
            &config,
        ),
        Commands::Centrality { file, top } => commands::centrality::run(&file, top, &config),
        Commands::Describe { file, label_predicate } => {
            commands::describe::run(&file, &label_predicate, &config)
        }
    }
}
