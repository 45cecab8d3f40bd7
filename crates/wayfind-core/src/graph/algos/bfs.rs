use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WayfindError};
use crate::graph::algos::shared::{Mark, TraversalState};
use crate::graph::store::Graph;
use crate::graph::types::PredecessorMap;

/// Breadth-first walk from `source`.
///
/// Maintains a FIFO queue seeded with the source. Each node is
/// discovered exactly once, at its minimum hop distance, so the
/// predecessor chain to any reached node is a shortest walk by edge
/// count.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bfs_traverse<N>(graph: &Graph<N>, source: &N) -> Result<PredecessorMap<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    if !graph.contains(source) {
        return Err(WayfindError::unknown_node(source));
    }

    let mut state = TraversalState::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    state.set_mark(source.clone(), Mark::Discovered);
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        for successor in graph.successors(&current)? {
            if state.mark_of(successor) == Mark::Unvisited {
                // Every endpoint the walk reaches must be registered
                if !graph.contains(successor) {
                    return Err(WayfindError::unknown_node(successor));
                }
                state.set_mark(successor.clone(), Mark::Discovered);
                state.set_predecessor(successor.clone(), current.clone());
                queue.push_back(successor.clone());
            }
        }
        state.set_mark(current, Mark::Finished);
    }

    let predecessors = state.into_predecessors();
    tracing::debug!(reached = predecessors.len() + 1, "bfs_traverse");
    Ok(predecessors)
}
