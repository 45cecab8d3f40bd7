//! Traversal engines
//!
//! Single-source walks over the node store, each producing a
//! predecessor map restricted to the reachable component:
//! - `bfs`: FIFO-queue walk discovering each node at its minimum hop
//!   distance from the source
//! - `dfs`: explicit-stack depth-first visit
//! - `shared`: per-call traversal state (visitation markers and
//!   predecessor tracking)

pub mod bfs;
pub mod dfs;
pub mod shared;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use shared::{Mark, TraversalState};

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{PredecessorMap, Strategy};

/// Run a single-source traversal with the chosen strategy.
///
/// Fails with `UnknownNode` if `source` — or any node an edge leads to
/// during the walk — was never registered. The returned map covers
/// only the component reachable from `source`; nodes of other
/// components have no entry.
pub fn traverse<N>(graph: &Graph<N>, source: &N, strategy: Strategy) -> Result<PredecessorMap<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    match strategy {
        Strategy::Bfs => bfs_traverse(graph, source),
        Strategy::Dfs => dfs_traverse(graph, source),
    }
}
