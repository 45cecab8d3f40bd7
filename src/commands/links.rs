//! Successor listing command
use std::time::Instant;

use crate::cli::parse::build_graph;
use crate::cli::{Cli, GraphArgs, OutputFormat};
use wayfind_core::error::Result;

/// Execute the links command
pub fn execute(cli: &Cli, graph_args: &GraphArgs, of: &str, start: Instant) -> Result<()> {
    let graph = build_graph(graph_args)?;

    let mut linked: Vec<String> = graph.linked_nodes(&of.to_string())?.into_iter().collect();
    linked.sort();

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), count = linked.len(), "linked_nodes");
    }

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "node": of,
                "count": linked.len(),
                "linked": linked,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if linked.is_empty() {
                if !cli.quiet {
                    println!("no links from {}", of);
                }
            } else {
                for node in &linked {
                    println!("{} -> {}", of, node);
                }
            }
        }
    }

    Ok(())
}
