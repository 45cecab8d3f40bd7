use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::WayfindError;

/// Traversal strategy selector for path queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Breadth-first: shortest walk by edge count
    #[default]
    Bfs,
    /// Depth-first: first walk found along the discovery chain
    Dfs,
}

impl FromStr for Strategy {
    type Err = WayfindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => Err(WayfindError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
        }
    }
}

/// Predecessor map produced by a traversal: each reached node maps to
/// the node that first discovered it. The source and nodes outside the
/// reachable component have no entry.
pub type PredecessorMap<N> = HashMap<N, N>;

/// Path query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<N> {
    pub from: N,
    pub to: N,
    pub strategy: String,
    pub found: bool,
    pub nodes: Vec<N>,
    pub path_length: usize,
}
