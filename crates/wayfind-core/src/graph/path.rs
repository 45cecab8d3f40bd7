//! Path reconstruction from traversal results

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{PathResult, PredecessorMap, Strategy};

/// Rebuild the walk from `source` to `target` recorded in a
/// predecessor map.
///
/// Returns the singleton `[source]` when the endpoints coincide and an
/// empty vector when `target` has no entry in the map (unreached).
/// Pure function of the map; never consults the graph. Walks the
/// predecessor pointers backward and reverses, the iterative shape of
/// the recursive definition.
pub fn reconstruct_path<N>(predecessors: &PredecessorMap<N>, source: &N, target: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if source == target {
        return vec![source.clone()];
    }
    if !predecessors.contains_key(target) {
        return Vec::new();
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        // Each node gets at most one predecessor, assigned at discovery
        // time, so this chain cannot cycle
        match predecessors.get(current) {
            Some(predecessor) => {
                path.push(predecessor.clone());
                current = predecessor;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Run a path query and package the outcome for presentation.
///
/// `path_length` is the edge count of the returned walk; an
/// unreachable target yields `found: false` with an empty node list.
#[tracing::instrument(skip(graph))]
pub fn find_path<N>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    strategy: Strategy,
) -> Result<PathResult<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let nodes = graph.get_path(source, target, strategy)?;
    let found = !nodes.is_empty();
    Ok(PathResult {
        from: source.clone(),
        to: target.clone(),
        strategy: strategy.to_string(),
        found,
        path_length: nodes.len().saturating_sub(1),
        nodes,
    })
}
