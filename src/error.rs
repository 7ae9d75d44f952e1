//! Error types for the graph model and algorithms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for graph construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphError {
    /// Vertex id outside the valid range [1, `vertex_count`].
    InvalidVertex { id: u64, vertex_count: u64 },
    /// Query against a vertex that is not part of the result's domain.
    UnknownVertex(u64),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex { id, vertex_count } => {
                write!(
                    f,
                    "Invalid vertex id {id}: graph has vertices 1..={vertex_count}"
                )
            },
            Self::UnknownVertex(id) => write!(f, "Unknown vertex: {id}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
