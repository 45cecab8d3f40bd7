use wayfind_core::error::{Result, WayfindError};
use wayfind_core::format::OutputFormat;
use wayfind_core::graph::{Graph, Strategy};

use super::GraphArgs;

/// Parse traversal strategy from string (clap value parser)
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse output format from string (clap value parser)
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Split an edge spec of the form FROM:TO
fn split_edge_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok((from, to)),
        _ => Err(WayfindError::invalid_value(
            "edge spec (expected FROM:TO)",
            spec,
        )),
    }
}

/// Build a graph from `--node` and `--edge` flags.
///
/// Nodes are registered first, then edges in the order given; the
/// endpoints of each edge are registered before the edge is appended.
pub fn build_graph(args: &GraphArgs) -> Result<Graph<String>> {
    let mut graph = Graph::with_capacity(args.nodes.len());

    for node in &args.nodes {
        graph.add_node(node.clone());
    }

    for spec in &args.edges {
        let (from, to) = split_edge_spec(spec)?;
        let from = from.to_string();
        graph.add_node(from.clone());
        graph.add_node(to.to_string());
        graph.add_edge(&from, to.to_string())?;
    }

    Ok(graph)
}
