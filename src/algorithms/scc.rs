//! Strongly Connected Components using Kosaraju's two-pass algorithm.
//!
//! A strongly connected component (SCC) is a maximal set of vertices such that
//! there is a path from every vertex to every other vertex in the set.
//!
//! Pass 1 walks the graph with every edge reversed (following in-edges) and
//! records vertices in post-order, producing a finish-order sequence. Pass 2
//! processes vertices in decreasing finish order; each forward DFS from a
//! not-yet-explored vertex discovers exactly one component. Both passes use
//! explicit work-stacks, so recursion depth never limits the graph size.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DirectedGraph;

/// Result of SCC computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccResult {
    /// Component sizes, sorted ascending. Sizes sum to the vertex count.
    pub sizes: Vec<usize>,
}

impl SccResult {
    /// Number of strongly connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Whether every vertex can reach every other vertex.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.sizes.len() == 1
    }

    /// The `k` largest component sizes, in descending order.
    #[must_use]
    pub fn largest(&self, k: usize) -> Vec<usize> {
        self.sizes.iter().rev().take(k).copied().collect()
    }
}

impl DirectedGraph {
    /// Compute the sizes of all strongly connected components.
    ///
    /// Time complexity: O(V + E), two depth-first traversals.
    #[must_use]
    pub fn strongly_connected_components(&self) -> SccResult {
        let n = self.vertex_count() as usize;
        if n == 0 {
            return SccResult { sizes: Vec::new() };
        }

        let finish_order = self.reversed_finish_order();

        // Pass 2: forward DFS in decreasing finish order; each root discovers
        // one component.
        let mut explored = vec![false; n];
        let mut sizes = Vec::new();
        let mut work = Vec::new();
        for &root in finish_order.iter().rev() {
            if explored[root] {
                continue;
            }
            explored[root] = true;
            work.push(root);
            let mut size = 0;
            while let Some(v) = work.pop() {
                size += 1;
                for &edge_id in &self.out_edges[v] {
                    let w = (self.edges[edge_id].head - 1) as usize;
                    if !explored[w] {
                        explored[w] = true;
                        work.push(w);
                    }
                }
            }
            sizes.push(size);
        }

        sizes.sort_unstable();
        debug!(
            vertices = n,
            components = sizes.len(),
            "SCC computation complete"
        );
        SccResult { sizes }
    }

    /// Pass 1: post-order finish sequence of a DFS over the reversed graph
    /// (every edge followed head-to-tail). Iterative, one cursor per frame.
    fn reversed_finish_order(&self) -> Vec<usize> {
        let n = self.vertex_count() as usize;
        let mut explored = vec![false; n];
        let mut finish = Vec::with_capacity(n);
        // (vertex index, next in-edge cursor)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if explored[start] {
                continue;
            }
            explored[start] = true;
            stack.push((start, 0));
            while let Some(frame) = stack.last_mut() {
                let (v, cursor) = *frame;
                if let Some(&edge_id) = self.in_edges[v].get(cursor) {
                    frame.1 += 1;
                    let w = (self.edges[edge_id].tail - 1) as usize;
                    if !explored[w] {
                        explored[w] = true;
                        stack.push((w, 0));
                    }
                } else {
                    finish.push(v);
                    stack.pop();
                }
            }
        }
        finish
    }
}
