//! CLI argument parsing for wayfind
//!
//! Uses clap for argument parsing. Supports global flags: --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};

pub use wayfind_core::format::OutputFormat;
use wayfind_core::graph::Strategy;

/// Wayfind - directed-graph path queries from the command line
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "WAYFIND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON with span events
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph construction flags shared by the query commands.
///
/// Nodes named only as `--edge` endpoints are registered before the
/// edge is appended, so every edge is added between known nodes.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Register a node (can be specified multiple times)
    #[arg(long = "node", value_name = "NODE", action = clap::ArgAction::Append)]
    pub nodes: Vec<String>,

    /// Add a directed edge (can be specified multiple times)
    #[arg(long = "edge", value_name = "FROM:TO", action = clap::ArgAction::Append)]
    pub edges: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Path {
        /// Start node
        #[arg(long)]
        from: String,

        /// Destination node
        #[arg(long)]
        to: String,

        /// Traversal strategy
        #[arg(long, default_value = "bfs", value_parser = parse::parse_strategy)]
        strategy: Strategy,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List the registered node set
    Nodes {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List the distinct successors of a node
    Links {
        /// Node whose successors to list
        #[arg(long)]
        of: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Build the bundled sample graph and check the expected results
    Demo {
        /// Traversal strategy
        #[arg(long, default_value = "bfs", value_parser = parse::parse_strategy)]
        strategy: Strategy,
    },
}
