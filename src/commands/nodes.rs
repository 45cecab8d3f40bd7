//! Node set listing command
use std::time::Instant;

use crate::cli::parse::build_graph;
use crate::cli::{Cli, GraphArgs, OutputFormat};
use wayfind_core::error::Result;

/// Execute the nodes command
pub fn execute(cli: &Cli, graph_args: &GraphArgs, start: Instant) -> Result<()> {
    let graph = build_graph(graph_args)?;

    let mut nodes: Vec<String> = graph.node_set().into_iter().collect();
    nodes.sort();

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), count = nodes.len(), "node_set");
    }

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "count": nodes.len(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if nodes.is_empty() {
                if !cli.quiet {
                    println!("no nodes registered");
                }
            } else {
                for node in &nodes {
                    println!("{}", node);
                }
            }
        }
    }

    Ok(())
}
