//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::types::DirectionKind;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(name = "adjg", about = "adjg CLI — inspect and edit .adjg graph files")]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty .adjg file
    Create {
        /// Path to the .adjg file to create
        file: PathBuf,
        /// Direction: directed, undirected, bidirectional
        #[arg(long, default_value = "directed")]
        direction: String,
        /// Collapse parallel edges (at most one edge per node pair)
        #[arg(long)]
        simple: bool,
    },
    /// Display information about an .adjg file
    Info {
        /// Path to the .adjg file
        file: PathBuf,
    },
    /// Add a node to the graph
    AddNode {
        /// Path to the .adjg file
        file: PathBuf,
        /// Node label
        #[arg(long, default_value = "")]
        label: String,
    },
    /// Add an edge between two nodes
    Link {
        /// Path to the .adjg file
        file: PathBuf,
        /// Source node index
        source: u64,
        /// Target node index
        target: u64,
        /// Edge label
        #[arg(long, default_value = "")]
        label: String,
    },
    /// Remove edges touching a node and/or carrying a label
    Prune {
        /// Path to the .adjg file
        file: PathBuf,
        /// Remove edges incident to this node
        #[arg(long)]
        node: Option<u64>,
        /// Remove edges with this label
        #[arg(long)]
        label: Option<String>,
    },
    /// List connected components (edge direction ignored)
    Components {
        /// Path to the .adjg file
        file: PathBuf,
        /// Assign one display color per component
        #[arg(long)]
        colors: bool,
    },
    /// Breadth-first search from a node
    Bfs {
        /// Path to the .adjg file
        file: PathBuf,
        /// Start node index
        start: u64,
        /// Refuse the step SRC:TGT; the subtree behind it is not explored (repeatable)
        #[arg(long = "block")]
        blocked: Vec<String>,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the .adjg file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn parse_step(step: &str) -> Option<(u64, u64)> {
    let (source, target) = step.split_once(':')?;
    Some((source.trim().parse().ok()?, target.trim().parse().ok()?))
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

    let result = match cli.command {
        Commands::Create {
            file,
            direction,
            simple,
        } => {
            let kind = match DirectionKind::from_name(&direction) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid direction: {}", direction);
                    process::exit(3);
                }
            };
            commands::cmd_create(&file, kind, !simple, json)
        }
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddNode { file, label } => commands::cmd_add_node(&file, &label, json),
        Commands::Link {
            file,
            source,
            target,
            label,
        } => commands::cmd_link(&file, source, target, &label, json),
        Commands::Prune { file, node, label } => commands::cmd_prune(&file, node, label, json),
        Commands::Components { file, colors } => commands::cmd_components(&file, colors, json),
        Commands::Bfs {
            file,
            start,
            blocked,
        } => {
            let mut steps = Vec::with_capacity(blocked.len());
            for step in &blocked {
                match parse_step(step) {
                    Some(pair) => steps.push(pair),
                    None => {
                        eprintln!("Invalid step (expected SRC:TGT): {}", step);
                        process::exit(3);
                    }
                }
            }
            commands::cmd_bfs(&file, start, steps, json)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidMagic
            | GraphError::UnsupportedVersion(_)
            | GraphError::Truncated
            | GraphError::Corrupt(_)
            | GraphError::ConfigMismatch { .. } => 2,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
