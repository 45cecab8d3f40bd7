use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WayfindError};
use crate::graph::algos::shared::{Mark, TraversalState};
use crate::graph::store::Graph;
use crate::graph::types::PredecessorMap;

/// Depth-first walk from `source`.
///
/// Iterative formulation: an explicit stack of (node, next-successor
/// index) frames replaces the recursive visit, so depth is bounded by
/// heap memory rather than the call stack while preserving the
/// recursive discovery and finish order. A successor's predecessor is
/// always the node whose frame discovered it — the node actually being
/// visited, never the walk's origin.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dfs_traverse<N>(graph: &Graph<N>, source: &N) -> Result<PredecessorMap<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    if !graph.contains(source) {
        return Err(WayfindError::unknown_node(source));
    }

    let mut state = TraversalState::new();
    let mut stack: Vec<(N, usize)> = Vec::new();

    state.set_mark(source.clone(), Mark::Discovered);
    stack.push((source.clone(), 0));

    loop {
        // Advance the top frame to its next unexamined successor
        let advanced = {
            let Some((current, next)) = stack.last_mut() else {
                break;
            };
            let successors = graph.successors(current)?;
            match successors.get(*next) {
                Some(successor) => {
                    *next += 1;
                    Some((current.clone(), successor.clone()))
                }
                None => None,
            }
        };

        match advanced {
            Some((current, successor)) => {
                if state.mark_of(&successor) == Mark::Unvisited {
                    // Every endpoint the walk reaches must be registered
                    if !graph.contains(&successor) {
                        return Err(WayfindError::unknown_node(&successor));
                    }
                    state.set_mark(successor.clone(), Mark::Discovered);
                    state.set_predecessor(successor.clone(), current);
                    stack.push((successor, 0));
                }
            }
            None => {
                if let Some((finished, _)) = stack.pop() {
                    state.set_mark(finished, Mark::Finished);
                }
            }
        }
    }

    let predecessors = state.into_predecessors();
    tracing::debug!(reached = predecessors.len() + 1, "dfs_traverse");
    Ok(predecessors)
}
