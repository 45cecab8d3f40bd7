//! Graph storage and path-finding operations
//!
//! The algorithmic core of wayfind:
//! - Adjacency-list node store with ordered successor lists
//! - Single-source traversal engines (breadth-first and depth-first)
//!   producing predecessor maps over the reachable component
//! - Path reconstruction from a predecessor map

pub mod algos;
pub mod path;
pub mod store;
pub mod types;

pub use algos::traverse;
pub use path::{find_path, reconstruct_path};
pub use store::Graph;
pub use types::{PathResult, PredecessorMap, Strategy};
