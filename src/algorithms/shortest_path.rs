//! Single-source shortest paths on undirected weighted graphs.
//!
//! This is deliberately the naive O(V·E) form of Dijkstra's algorithm: every
//! settling step rescans the full edge list for the frontier edge (exactly one
//! endpoint settled) minimizing settled-distance + weight, rather than keeping
//! a priority queue over the frontier. The rescan is the defining
//! characteristic of the algorithm, not an oversight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EdgeId, GraphError, Result, UndirectedGraph};

/// A reconstructed shortest path from the source of a [`ShortestPathTree`]
/// to one target vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPath {
    /// Vertex ids from source to target, inclusive.
    pub vertices: Vec<u64>,
    /// Edge ids in source-to-target order; one fewer than `vertices`.
    pub edges: Vec<EdgeId>,
    /// Sum of the traversed edge weights.
    pub total_weight: u64,
}

/// Result of a shortest-path run: per-vertex distances and predecessor edges
/// rooted at the source.
///
/// The tree owns its own scratch state, so the graph it was computed from
/// stays immutable and can serve multiple runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: u64,
    /// `distances[i]` is the settled distance of vertex `i + 1`, `None` if the
    /// vertex is unreachable from the source.
    distances: Vec<Option<u64>>,
    /// `route[i]` is the edge that settled vertex `i + 1` and the vertex at
    /// its other end. `None` for the source and for unreachable vertices.
    route: Vec<Option<(EdgeId, u64)>>,
}

impl ShortestPathTree {
    /// The source vertex this tree is rooted at.
    #[must_use]
    pub const fn source(&self) -> u64 {
        self.source
    }

    /// Number of vertices reachable from the source (the source included).
    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Shortest distance from the source to `target`, or `None` if `target`
    /// is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `target` is not a vertex of
    /// the graph this tree was computed from.
    pub fn distance(&self, target: u64) -> Result<Option<u64>> {
        let i = self.domain_index(target)?;
        Ok(self.distances[i])
    }

    /// One shortest path from the source to `target`, or `None` if `target`
    /// is unreachable. The path to the source itself has no edges and weight 0.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `target` is not a vertex of
    /// the graph this tree was computed from.
    pub fn path(&self, target: u64) -> Result<Option<WeightedPath>> {
        let i = self.domain_index(target)?;
        let Some(total_weight) = self.distances[i] else {
            return Ok(None);
        };

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;
        while current != self.source {
            let ci = (current - 1) as usize;
            let Some((edge_id, prev)) = self.route[ci] else {
                break;
            };
            edges.push(edge_id);
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();
        edges.reverse();

        Ok(Some(WeightedPath {
            vertices,
            edges,
            total_weight,
        }))
    }

    fn domain_index(&self, target: u64) -> Result<usize> {
        if target == 0 || target as usize > self.distances.len() {
            return Err(GraphError::UnknownVertex(target));
        }
        Ok((target - 1) as usize)
    }
}

impl UndirectedGraph {
    /// Compute single-source shortest paths from `source` over the whole
    /// graph, using the naive edge-scanning Dijkstra.
    ///
    /// Each step scans all edges for the frontier edge with the minimal
    /// settled-distance + weight and settles its unvisited endpoint. Ties are
    /// broken deterministically in favor of the first minimal edge in
    /// insertion order. Vertices left unsettled when no frontier edge remains
    /// are unreachable.
    ///
    /// Time complexity: O(V·E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `source` is out of range.
    pub fn shortest_paths(&self, source: u64) -> Result<ShortestPathTree> {
        let src = self.index(source)?;
        let n = self.vertex_count() as usize;

        let mut settled = vec![false; n];
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut route: Vec<Option<(EdgeId, u64)>> = vec![None; n];
        settled[src] = true;
        distances[src] = Some(0);
        let mut settled_count = 1;

        while settled_count < n {
            // (edge id, unsettled endpoint index, candidate distance) of the
            // best frontier edge seen so far. Strict less-than keeps the
            // first minimal edge in insertion order.
            let mut best: Option<(EdgeId, usize, u64)> = None;
            for (id, edge) in self.edges().iter().enumerate() {
                let ia = (edge.a - 1) as usize;
                let ib = (edge.b - 1) as usize;
                let (from, to) = match (settled[ia], settled[ib]) {
                    (true, false) => (ia, ib),
                    (false, true) => (ib, ia),
                    _ => continue,
                };
                let Some(base) = distances[from] else {
                    continue;
                };
                let candidate = base + edge.weight;
                if best.map_or(true, |(_, _, d)| candidate < d) {
                    best = Some((id, to, candidate));
                }
            }

            // No frontier edge: the remaining vertices are unreachable.
            let Some((edge_id, to, dist)) = best else {
                break;
            };
            let from_id = self.edges()[edge_id].other_end(to as u64 + 1);
            settled[to] = true;
            distances[to] = Some(dist);
            route[to] = Some((edge_id, from_id));
            settled_count += 1;
        }

        debug!(
            source,
            settled = settled_count,
            vertices = n,
            "shortest-path run complete"
        );

        Ok(ShortestPathTree {
            source,
            distances,
            route,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_graph_distances() {
        // 1 -(5)- 2 -(3)- 3
        let mut g = UndirectedGraph::new(3);
        let e12 = g.add_edge(1, 2, 5).unwrap();
        let e23 = g.add_edge(2, 3, 3).unwrap();

        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(2).unwrap(), Some(5));
        assert_eq!(tree.distance(3).unwrap(), Some(8));

        let path = tree.path(3).unwrap().unwrap();
        assert_eq!(path.total_weight, 8);
        assert_eq!(path.edges, vec![e12, e23]);
        assert_eq!(path.vertices, vec![1, 2, 3]);
    }

    #[test]
    fn test_source_has_zero_distance_and_empty_path() {
        let g = UndirectedGraph::new(1);
        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(1).unwrap(), Some(0));
        let path = tree.path(1).unwrap().unwrap();
        assert!(path.edges.is_empty());
        assert_eq!(path.vertices, vec![1]);
        assert_eq!(path.total_weight, 0);
    }

    #[test]
    fn test_unreachable_is_explicit_none() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(1, 2, 1).unwrap();
        // Vertex 3 is isolated.
        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(3).unwrap(), None);
        assert_eq!(tree.path(3).unwrap(), None);
        assert_eq!(tree.settled_count(), 2);
    }

    #[test]
    fn test_prefers_cheaper_indirect_path() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(1, 3, 10).unwrap();
        let e12 = g.add_edge(1, 2, 1).unwrap();
        let e23 = g.add_edge(2, 3, 2).unwrap();

        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(3).unwrap(), Some(3));
        let path = tree.path(3).unwrap().unwrap();
        assert_eq!(path.edges, vec![e12, e23]);
    }

    #[test]
    fn test_triangle_inequality() {
        let mut g = UndirectedGraph::new(4);
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(2, 3, 6).unwrap();
        g.add_edge(1, 3, 9).unwrap();
        g.add_edge(3, 4, 1).unwrap();
        g.add_edge(2, 4, 8).unwrap();

        let tree = g.shortest_paths(1).unwrap();
        // Computed distance never exceeds any manually enumerated alternative.
        assert!(tree.distance(3).unwrap().unwrap() <= 9);
        assert!(tree.distance(3).unwrap().unwrap() <= 4 + 6);
        assert!(tree.distance(4).unwrap().unwrap() <= 4 + 8);
        assert_eq!(tree.distance(4).unwrap(), Some(9 + 1).min(Some(4 + 6 + 1)));
    }

    #[test]
    fn test_tie_break_first_edge_in_insertion_order() {
        // Two distinct parallel edges of equal weight; the first inserted wins.
        let mut g = UndirectedGraph::new(2);
        let first = g.add_edge(1, 2, 5).unwrap();
        let _second = g.add_edge(1, 2, 5).unwrap();

        let tree = g.shortest_paths(1).unwrap();
        let path = tree.path(2).unwrap().unwrap();
        assert_eq!(path.edges, vec![first]);
    }

    #[test]
    fn test_self_loops_are_inert() {
        let mut g = UndirectedGraph::new(2);
        g.add_edge(1, 1, 100).unwrap();
        g.add_edge(1, 2, 3).unwrap();
        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(2).unwrap(), Some(3));
        assert_eq!(tree.distance(1).unwrap(), Some(0));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(1, 2, 0).unwrap();
        g.add_edge(2, 3, 0).unwrap();
        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(3).unwrap(), Some(0));
        assert_eq!(tree.path(3).unwrap().unwrap().edges.len(), 2);
    }

    #[test]
    fn test_invalid_source() {
        let g = UndirectedGraph::new(2);
        assert_eq!(
            g.shortest_paths(3),
            Err(GraphError::InvalidVertex {
                id: 3,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_unknown_target() {
        let g = UndirectedGraph::new(2);
        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(tree.path(0), Err(GraphError::UnknownVertex(0)));
    }

    #[test]
    fn test_dense_graph_multiple_routes() {
        // Diamond with an expensive shortcut; both cheap routes cost 2.
        let mut g = UndirectedGraph::new(4);
        let e12 = g.add_edge(1, 2, 1).unwrap();
        let e24 = g.add_edge(2, 4, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(3, 4, 1).unwrap();
        g.add_edge(1, 4, 5).unwrap();

        let tree = g.shortest_paths(1).unwrap();
        assert_eq!(tree.distance(4).unwrap(), Some(2));
        // First minimal frontier edge in insertion order settles vertex 4.
        let path = tree.path(4).unwrap().unwrap();
        assert_eq!(path.edges, vec![e12, e24]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut g = UndirectedGraph::new(2);
        g.add_edge(1, 2, 7).unwrap();
        let tree = g.shortest_paths(1).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let restored: ShortestPathTree = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tree);
        assert_eq!(restored.distance(2).unwrap(), Some(7));
    }
}
