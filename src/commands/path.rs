//! Path query command
use std::time::Instant;

use crate::cli::parse::build_graph;
use crate::cli::{Cli, GraphArgs, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::{find_path, Strategy};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph_args: &GraphArgs,
    from: &str,
    to: &str,
    strategy: Strategy,
    start: Instant,
) -> Result<()> {
    let graph = build_graph(graph_args)?;

    if cli.verbose {
        tracing::debug!(
            elapsed = ?start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "build_graph"
        );
    }

    let result = find_path(&graph, &from.to_string(), &to.to_string(), strategy)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if result.found {
                println!("{}", result.nodes.join(" -> "));
                if !cli.quiet {
                    println!("{} hop(s) via {}", result.path_length, result.strategy);
                }
            } else if !cli.quiet {
                println!("no path from {} to {}", result.from, result.to);
            }
        }
    }

    Ok(())
}
