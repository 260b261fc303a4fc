//! Spanning forest of the 1-skeleton and the fundamental cycle basis it induces.
//!
//! Each edge outside the forest closes exactly one cycle with the tree path between
//! its endpoints. Those cycles form a basis of the cycle space, which has rank
//! `E - V + C`.

use std::collections::VecDeque;

use log::{debug, trace};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use crate::{columns::Chain, complex::Edge};

pub struct SpanningForest {
    // Edge weights are positions in the edge list
    graph: UnGraph<(), usize>,
    tree_edges: Vec<bool>,
    // (parent vertex, tree edge) per vertex, None at roots
    parent: Vec<Option<(usize, usize)>>,
}

fn opposite(endpoints: (NodeIndex, NodeIndex), node: NodeIndex) -> NodeIndex {
    if endpoints.0 == node {
        endpoints.1
    } else {
        endpoints.0
    }
}

impl SpanningForest {
    /// Depth-first traversal from every unvisited vertex, using an explicit stack.
    pub fn build(n_vertices: usize, edges: &[Edge]) -> Self {
        let mut graph: UnGraph<(), usize> = UnGraph::with_capacity(n_vertices, edges.len());
        for _ in 0..n_vertices {
            graph.add_node(());
        }
        for (idx, edge) in edges.iter().enumerate() {
            graph.add_edge(NodeIndex::new(edge.0), NodeIndex::new(edge.1), idx);
        }

        let mut tree_edges = vec![false; edges.len()];
        let mut parent = vec![None; n_vertices];
        let mut visited = vec![false; n_vertices];

        // (vertex, (parent vertex, edge index) it was reached through)
        let mut stack: Vec<(usize, Option<(usize, usize)>)> = vec![];
        for root in 0..n_vertices {
            if visited[root] {
                continue;
            }
            stack.push((root, None));
            while let Some((vertex, via)) = stack.pop() {
                if visited[vertex] {
                    continue;
                }
                visited[vertex] = true;
                if let Some((_, edge_idx)) = via {
                    tree_edges[edge_idx] = true;
                }
                parent[vertex] = via;

                let node = NodeIndex::new(vertex);
                for edge_ref in graph.edges(node) {
                    let neighbour = opposite((edge_ref.source(), edge_ref.target()), node).index();
                    if !visited[neighbour] {
                        stack.push((neighbour, Some((vertex, *edge_ref.weight()))));
                    }
                }
            }
        }

        Self {
            graph,
            tree_edges,
            parent,
        }
    }

    /// One tree per component, each rooted at a vertex without parent.
    pub fn n_components(&self) -> usize {
        self.parent.iter().filter(|p| p.is_none()).count()
    }

    pub fn is_tree_edge(&self, edge_idx: usize) -> bool {
        self.tree_edges[edge_idx]
    }

    pub fn n_tree_edges(&self) -> usize {
        self.tree_edges.iter().filter(|&&t| t).count()
    }

    /// Edge indices along the tree path from `from` to `to`,
    /// found by breadth-first search over tree edges only.
    /// `None` if the two vertices lie in different trees.
    pub fn tree_path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let n_vertices = self.parent.len();
        let mut visited = vec![false; n_vertices];
        let mut predecessor: Vec<Option<(usize, usize)>> = vec![None; n_vertices];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;

        while let Some(vertex) = queue.pop_front() {
            if vertex == to {
                break;
            }
            let node = NodeIndex::new(vertex);
            for edge_ref in self.graph.edges(node) {
                let edge_idx = *edge_ref.weight();
                if !self.tree_edges[edge_idx] {
                    continue;
                }
                let neighbour = opposite((edge_ref.source(), edge_ref.target()), node).index();
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    predecessor[neighbour] = Some((vertex, edge_idx));
                    queue.push_back(neighbour);
                }
            }
        }

        if !visited[to] {
            return None;
        }
        let mut path = vec![];
        let mut working = to;
        while let Some((previous, edge_idx)) = predecessor[working] {
            path.push(edge_idx);
            working = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// One cycle per non-tree edge: the edge itself plus the tree path joining its endpoints.
pub fn fundamental_cycles(n_vertices: usize, edges: &[Edge]) -> Vec<Chain> {
    let forest = SpanningForest::build(n_vertices, edges);
    let n_edges = edges.len();
    debug!(
        "Spanning forest: {} trees, {} of {n_edges} edges",
        forest.n_components(),
        forest.n_tree_edges()
    );
    edges
        .iter()
        .enumerate()
        .filter(|(idx, _)| !forest.is_tree_edge(*idx))
        .filter_map(|(idx, edge)| {
            // Endpoints of an edge always share a tree
            let path = forest.tree_path(edge.0, edge.1)?;
            let cycle = Chain::from_indices(n_edges, path.into_iter().chain([idx]));
            trace!("Fundamental cycle for {edge:?}: {cycle:?}");
            Some(cycle)
        })
        .collect()
}
