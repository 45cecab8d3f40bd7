//! Adjacency-list node store
//!
//! Holds the registered node set and, per node, its ordered outgoing
//! successor list. Successor order is insertion order and duplicate
//! edges are kept as separate entries; `linked_nodes` collapses them
//! into a distinct set.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WayfindError};
use crate::graph::algos::traverse;
use crate::graph::path::reconstruct_path;
use crate::graph::types::Strategy;

/// Directed graph keyed by caller-supplied node identities.
///
/// Nodes carry no attributes beyond identity. The graph is built
/// incrementally with `add_node`/`add_edge` and must not be mutated
/// while a traversal over it is in progress; on a single thread the
/// borrow checker makes that unrepresentable.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Register a node. Re-adding an already-registered node is a
    /// no-op and keeps its successor list.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Append a directed edge to `source`'s successor list.
    ///
    /// Fails with `UnknownNode` if `source` was never registered. The
    /// target does not have to be registered at insertion time, but
    /// every edge endpoint must be registered before the graph is
    /// traversed.
    pub fn add_edge(&mut self, source: &N, target: N) -> Result<()> {
        match self.adjacency.get_mut(source) {
            Some(successors) => {
                successors.push(target);
                Ok(())
            }
            None => Err(WayfindError::unknown_node(source)),
        }
    }

    /// Whether `node` is registered.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Snapshot of all registered nodes, detached from the store.
    pub fn node_set(&self) -> HashSet<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// Distinct successors of `node`.
    ///
    /// Fails with `UnknownNode` if `node` is not registered.
    pub fn linked_nodes(&self, node: &N) -> Result<HashSet<N>> {
        self.successors(node)
            .map(|successors| successors.iter().cloned().collect())
    }

    /// Ordered successor list of `node`, duplicates included.
    pub fn successors(&self, node: &N) -> Result<&[N]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| WayfindError::unknown_node(node))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Find a walk from `source` to `target` using the chosen
    /// traversal strategy.
    ///
    /// Returns the singleton `[source]` when the endpoints coincide
    /// and an empty vector when `target` is not reachable from
    /// `source`. Fails with `UnknownNode` if `source` is not
    /// registered.
    pub fn get_path(&self, source: &N, target: &N, strategy: Strategy) -> Result<Vec<N>> {
        let predecessors = traverse(self, source, strategy)?;
        Ok(reconstruct_path(&predecessors, source, target))
    }
}

impl<N> Default for Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
