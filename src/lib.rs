// Pedantic lint configuration for graph_algos
#![allow(clippy::cast_possible_truncation)] // vertex counts fit in usize on supported targets
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::uninlined_format_args)] // Keep format strings readable

pub mod algorithms;
pub mod error;
pub mod heap;
pub mod sort;

pub use algorithms::{
    MinCutConfig, MinCutResult, SccResult, ShortestPathTree, WeightedPath,
};
pub use error::{GraphError, Result};
pub use heap::{Heap, HeapError, Max, MaxHeap, Min, MinHeap};

/// Index into a graph's edge arena.
pub type EdgeId = usize;

/// An undirected weighted edge. Endpoints are vertex ids, the weight is
/// non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: u64,
    pub b: u64,
    pub weight: u64,
}

impl Edge {
    /// Given one endpoint of the edge, returns the other endpoint.
    ///
    /// Does not check that `vertex` is actually an endpoint; callers walk
    /// adjacency lists, which only ever hand out incident edges.
    #[must_use]
    pub const fn other_end(&self, vertex: u64) -> u64 {
        if vertex == self.a {
            self.b
        } else {
            self.a
        }
    }
}

/// A directed unweighted edge from `tail` to `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedEdge {
    pub tail: u64,
    pub head: u64,
}

/// An undirected weighted graph with a fixed vertex set.
///
/// Vertices are dense ids `1..=vertex_count`, fixed at construction. Edges are
/// owned by the graph; each vertex keeps the [`EdgeId`]s of its incident edges.
/// The structure is never mutated after the edge list is built, so algorithm
/// runs keep their scratch state external and the graph can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    vertex_count: u64,
    pub(crate) edges: Vec<Edge>,
    pub(crate) incident: Vec<Vec<EdgeId>>,
}

impl UndirectedGraph {
    /// Create a graph with vertices `1..=vertex_count` and no edges.
    #[must_use]
    pub fn new(vertex_count: u64) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            incident: vec![Vec::new(); vertex_count as usize],
        }
    }

    /// Add an undirected edge between `a` and `b` with the given weight.
    ///
    /// Duplicate edges and self-loops are permitted; they do not break any of
    /// the algorithms. Returns the id of the new edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, a: u64, b: u64, weight: u64) -> Result<EdgeId> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        let id = self.edges.len();
        self.edges.push(Edge { a, b, weight });
        self.incident[ia].push(id);
        if ib != ia {
            self.incident[ib].push(id);
        }
        Ok(id)
    }

    #[must_use]
    pub const fn vertex_count(&self) -> u64 {
        self.vertex_count
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Ids of all edges incident to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn incident_edges(&self, vertex: u64) -> Result<&[EdgeId]> {
        let i = self.index(vertex)?;
        Ok(&self.incident[i])
    }

    /// Iterator over all vertex ids, `1..=vertex_count`.
    pub fn vertex_ids(&self) -> impl Iterator<Item = u64> {
        1..=self.vertex_count
    }

    /// Map a 1-based vertex id to its dense storage index.
    pub(crate) fn index(&self, id: u64) -> Result<usize> {
        if id == 0 || id > self.vertex_count {
            return Err(GraphError::InvalidVertex {
                id,
                vertex_count: self.vertex_count,
            });
        }
        Ok((id - 1) as usize)
    }
}

/// A directed unweighted graph with a fixed vertex set.
///
/// Same ownership model as [`UndirectedGraph`]: the graph owns the edges, each
/// vertex keeps edge ids in an out-list (edges it is the tail of) and an
/// in-list (edges it is the head of).
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertex_count: u64,
    pub(crate) edges: Vec<DirectedEdge>,
    pub(crate) out_edges: Vec<Vec<EdgeId>>,
    pub(crate) in_edges: Vec<Vec<EdgeId>>,
}

impl DirectedGraph {
    /// Create a graph with vertices `1..=vertex_count` and no edges.
    #[must_use]
    pub fn new(vertex_count: u64) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            out_edges: vec![Vec::new(); vertex_count as usize],
            in_edges: vec![Vec::new(); vertex_count as usize],
        }
    }

    /// Add a directed edge from `tail` to `head`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, tail: u64, head: u64) -> Result<EdgeId> {
        let it = self.index(tail)?;
        let ih = self.index(head)?;
        let id = self.edges.len();
        self.edges.push(DirectedEdge { tail, head });
        self.out_edges[it].push(id);
        self.in_edges[ih].push(id);
        Ok(id)
    }

    #[must_use]
    pub const fn vertex_count(&self) -> u64 {
        self.vertex_count
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&DirectedEdge> {
        self.edges.get(id)
    }

    /// Ids of edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn outgoing_edges(&self, vertex: u64) -> Result<&[EdgeId]> {
        let i = self.index(vertex)?;
        Ok(&self.out_edges[i])
    }

    /// Ids of edges entering `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn incoming_edges(&self, vertex: u64) -> Result<&[EdgeId]> {
        let i = self.index(vertex)?;
        Ok(&self.in_edges[i])
    }

    /// Iterator over all vertex ids, `1..=vertex_count`.
    pub fn vertex_ids(&self) -> impl Iterator<Item = u64> {
        1..=self.vertex_count
    }

    pub(crate) fn index(&self, id: u64) -> Result<usize> {
        if id == 0 || id > self.vertex_count {
            return Err(GraphError::InvalidVertex {
                id,
                vertex_count: self.vertex_count,
            });
        }
        Ok((id - 1) as usize)
    }
}
