//! Disjoint-set forest for counting connected components of the 1-skeleton.

use std::cmp::Ordering;

use crate::complex::Edge;

/// Union-find over `0..n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSetForest {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    /// Every node on the traversed path is re-pointed at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut working = x;
        while self.parent[working] != root {
            let next = self.parent[working];
            self.parent[working] = root;
            working = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; returns `false` if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Number of distinct representatives.
    pub fn component_count(&mut self) -> usize {
        (0..self.len()).filter(|&x| self.find(x) == x).count()
    }
}

/// β0 of the graph on `vertex_count` vertices with the given edges.
pub fn component_count(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut forest = DisjointSetForest::new(vertex_count);
    for edge in edges {
        forest.union(edge.0, edge.1);
    }
    forest.component_count()
}
