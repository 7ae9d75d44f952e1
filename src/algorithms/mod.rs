//! Graph algorithms module.
//!
//! This module provides the algorithms of the crate:
//! - Single-source shortest paths (naive Dijkstra, undirected weighted graphs)
//! - Strongly Connected Components (Kosaraju's two-pass algorithm)
//! - Random minimum cut (Karger's contraction algorithm)

mod min_cut;
mod scc;
mod shortest_path;

pub use min_cut::{MinCutConfig, MinCutResult};
pub use scc::SccResult;
pub use shortest_path::{ShortestPathTree, WeightedPath};
