//! Sample graph walkthrough
//!
//! Builds the bundled five-node graph and checks the documented
//! expectations for node listing, link listing, and path queries.
use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::graph::{Graph, Strategy};

/// Outcome of a single demo expectation
#[derive(Debug, Serialize)]
struct Check {
    name: String,
    actual: String,
    passed: bool,
}

/// The bundled sample: nodes a-e with edges
/// a->b, b->c, c->d, d->e, c->a, e->a
fn sample_graph() -> Result<Graph<String>> {
    let mut graph = Graph::with_capacity(5);
    for node in ["a", "b", "c", "d", "e"] {
        graph.add_node(node.to_string());
    }
    for (from, to) in [
        ("a", "b"),
        ("b", "c"),
        ("c", "d"),
        ("d", "e"),
        ("c", "a"),
        ("e", "a"),
    ] {
        graph.add_edge(&from.to_string(), to.to_string())?;
    }
    Ok(graph)
}

fn sorted_join(set: &HashSet<String>) -> String {
    let mut nodes: Vec<&str> = set.iter().map(String::as_str).collect();
    nodes.sort_unstable();
    nodes.join(", ")
}

fn set_of(nodes: &[&str]) -> HashSet<String> {
    nodes.iter().map(|n| n.to_string()).collect()
}

fn run_checks(graph: &Graph<String>, strategy: Strategy) -> Result<Vec<Check>> {
    let node_set = graph.node_set();
    let linked = graph.linked_nodes(&"c".to_string())?;
    let path = graph.get_path(&"b".to_string(), &"a".to_string(), strategy)?;

    // Either walk is valid: c links to both a and d
    let accepted: [&[&str]; 2] = [&["b", "c", "a"], &["b", "c", "d", "e", "a"]];
    let path_ok = accepted
        .iter()
        .any(|expected| path.iter().map(String::as_str).eq(expected.iter().copied()));

    Ok(vec![
        Check {
            name: "node_set".to_string(),
            actual: sorted_join(&node_set),
            passed: node_set == set_of(&["a", "b", "c", "d", "e"]),
        },
        Check {
            name: "linked_nodes(c)".to_string(),
            actual: sorted_join(&linked),
            passed: linked == set_of(&["a", "d"]),
        },
        Check {
            name: format!("get_path(b, a, {})", strategy),
            actual: path.join(" -> "),
            passed: path_ok,
        },
    ])
}

/// Execute the demo command
pub fn execute(cli: &Cli, strategy: Strategy, start: Instant) -> Result<()> {
    let graph = sample_graph()?;
    let checks = run_checks(&graph, strategy)?;
    let passed = checks.iter().all(|check| check.passed);

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), passed, "demo_checks");
    }

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "strategy": strategy.to_string(),
                "passed": passed,
                "checks": checks,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for check in &checks {
                let status = if check.passed { "ok" } else { "FAILED" };
                println!("{}: {} -> {}", status, check.name, check.actual);
            }
        }
    }

    if passed {
        Ok(())
    } else {
        let failed: Vec<&str> = checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.name.as_str())
            .collect();
        Err(WayfindError::Other(format!(
            "demo expectation failed: {}",
            failed.join(", ")
        )))
    }
}
