//! The Vietoris-Rips complex of a grid point set at a fixed threshold, up to dimension 2.
//!
//! Vertex indices are positions in the input sequence and only mean something within
//! the complex built from that sequence.
//! Edges and triangles are stored in ascending lexicographic order of their vertex
//! indices, so their positions in [`SimplicialComplex::edges`] and
//! [`SimplicialComplex::triangles`] are deterministic for a given input.

use log::debug;
use rustc_hash::FxHashMap;

use crate::grid::{distance, GridPoint};

/// An edge `{u, v}` stored canonically with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Canonicalises the endpoint order.
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    pub fn vertices(&self) -> [usize; 2] {
        [self.0, self.1]
    }
}

/// A triangle `{a, b, c}` stored canonically with `a < b < c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut vertices = [a, b, c];
        vertices.sort_unstable();
        Triangle(vertices[0], vertices[1], vertices[2])
    }

    pub fn vertices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }

    /// The three faces, each missing one vertex.
    pub fn faces(&self) -> [Edge; 3] {
        [
            Edge(self.1, self.2),
            Edge(self.0, self.2),
            Edge(self.0, self.1),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct SimplicialComplex {
    points: Vec<GridPoint>,
    edges: Vec<Edge>,
    triangles: Vec<Triangle>,
    edge_lookup: FxHashMap<Edge, usize>,
}

impl SimplicialComplex {
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Position of the edge `{u, v}` in [`edges`](Self::edges), if present.
    pub fn edge_index(&self, u: usize, v: usize) -> Option<usize> {
        self.edge_lookup.get(&Edge::new(u, v)).copied()
    }

    /// Positions of the three edges bounding `triangle`.
    /// `None` if any of them is missing, which cannot happen for triangles of this complex.
    pub fn triangle_edges(&self, triangle: &Triangle) -> Option<[usize; 3]> {
        let [bc, ac, ab] = triangle.faces();
        Some([
            self.edge_lookup.get(&bc).copied()?,
            self.edge_lookup.get(&ac).copied()?,
            self.edge_lookup.get(&ab).copied()?,
        ])
    }

    /// Rank of the cycle space of the 1-skeleton, `E - V + C`.
    pub fn cycle_rank(&self) -> usize {
        let components = crate::union_find::component_count(self.n_vertices(), &self.edges);
        self.n_edges() + components - self.n_vertices()
    }
}

/// Build the Vietoris-Rips complex of `points` at threshold `epsilon`.
///
/// Points are assumed distinct and `epsilon` positive; neither is checked here
/// (see [`Evaluation::compute`](crate::Evaluation::compute) for the validating entry point).
/// Triangle enumeration is cubic in the number of points.
pub fn build_complex(points: &[GridPoint], epsilon: u32) -> SimplicialComplex {
    let n_points = points.len();
    let threshold = u64::from(epsilon);
    let within = |i: usize, j: usize| distance(&points[i], &points[j]) <= threshold;

    let mut edges = vec![];
    for i in 0..n_points {
        for j in (i + 1)..n_points {
            if within(i, j) {
                edges.push(Edge(i, j));
            }
        }
    }

    let mut triangles = vec![];
    for i in 0..n_points {
        for j in (i + 1)..n_points {
            if !within(i, j) {
                continue;
            }
            for k in (j + 1)..n_points {
                if within(i, k) && within(j, k) {
                    triangles.push(Triangle(i, j, k));
                }
            }
        }
    }

    let edge_lookup = edges
        .iter()
        .enumerate()
        .map(|(idx, edge)| (*edge, idx))
        .collect();

    debug!(
        "Built complex at epsilon={epsilon}: V={}, E={}, T={}",
        n_points,
        edges.len(),
        triangles.len()
    );

    SimplicialComplex {
        points: points.to_vec(),
        edges,
        triangles,
        edge_lookup,
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{build_complex, Edge, Triangle};
    use crate::grid::{distance, GridPoint};

    fn square() -> Vec<GridPoint> {
        vec![
            GridPoint::new(0, 0),
            GridPoint::new(0, 2),
            GridPoint::new(2, 2),
            GridPoint::new(2, 0),
        ]
    }

    fn scattered() -> Vec<GridPoint> {
        [(0, 0), (0, 1), (1, 3), (4, 4), (2, 2), (5, 0), (3, 1), (6, 6)]
            .into_iter()
            .map(GridPoint::from)
            .collect()
    }

    #[test]
    fn test_square_sides_only() {
        let complex = build_complex(&square(), 2);
        assert_eq!(
            complex.edges(),
            &[Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
        assert_eq!(complex.n_triangles(), 0);
        assert_eq!(complex.edge_index(3, 0), Some(1));
        assert_eq!(complex.edge_index(0, 2), None);
    }

    #[test]
    fn test_square_with_diagonals() {
        let complex = build_complex(&square(), 4);
        assert_eq!(complex.n_edges(), 6);
        assert_eq!(
            complex.triangles(),
            &[
                Triangle(0, 1, 2),
                Triangle(0, 1, 3),
                Triangle(0, 2, 3),
                Triangle(1, 2, 3)
            ]
        );
        let edges = complex.triangle_edges(&Triangle(0, 1, 3)).unwrap();
        let edges = edges.map(|idx| complex.edges()[idx]);
        assert_eq!(edges, [Edge(1, 3), Edge(0, 3), Edge(0, 1)]);
    }

    #[test]
    fn test_matches_brute_force() {
        let points = scattered();
        for epsilon in 1..=8 {
            let complex = build_complex(&points, epsilon);
            let expected_edges: Vec<_> = (0..points.len())
                .tuple_combinations::<(_, _)>()
                .filter(|&(i, j)| distance(&points[i], &points[j]) <= u64::from(epsilon))
                .map(|(i, j)| Edge(i, j))
                .collect();
            let expected_triangles: Vec<_> = (0..points.len())
                .tuple_combinations::<(_, _, _)>()
                .filter(|&(i, j, k)| {
                    [(i, j), (i, k), (j, k)]
                        .iter()
                        .all(|&(a, b)| distance(&points[a], &points[b]) <= u64::from(epsilon))
                })
                .map(|(i, j, k)| Triangle(i, j, k))
                .collect();
            assert_eq!(complex.edges(), expected_edges.as_slice());
            assert_eq!(complex.triangles(), expected_triangles.as_slice());
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let points = scattered();
        let first = build_complex(&points, 3);
        let second = build_complex(&points, 3);
        assert_eq!(first.points(), second.points());
        assert_eq!(first.edges(), second.edges());
        assert_eq!(first.triangles(), second.triangles());
    }

    #[test]
    fn test_monotone_in_epsilon() {
        let points = scattered();
        let complexes: Vec<_> = (1..=12).map(|eps| build_complex(&points, eps)).collect();
        for (smaller, larger) in complexes.iter().tuple_windows() {
            assert!(smaller.n_edges() <= larger.n_edges());
            assert!(smaller.n_triangles() <= larger.n_triangles());
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = build_complex(&[], 1);
        assert_eq!(
            (empty.n_vertices(), empty.n_edges(), empty.n_triangles()),
            (0, 0, 0)
        );
        assert_eq!(empty.cycle_rank(), 0);

        let single = build_complex(&[GridPoint::new(3, 4)], 5);
        assert_eq!(
            (single.n_vertices(), single.n_edges(), single.n_triangles()),
            (1, 0, 0)
        );
    }

    #[test]
    fn test_far_points_stay_apart() {
        // Gaps sum to 6e9, past u32::MAX; must not wrap into an edge
        let points = vec![
            GridPoint::new(0, 0),
            GridPoint::new(3_000_000_000, 3_000_000_000),
            GridPoint::new(3_000_000_000, 3_000_000_001),
        ];
        let complex = build_complex(&points, u32::MAX);
        assert_eq!(complex.edges(), &[Edge(1, 2)]);
        assert_eq!(complex.n_triangles(), 0);
    }

    #[test]
    fn test_canonical_keys() {
        assert_eq!(Edge::new(5, 2), Edge(2, 5));
        assert_eq!(Triangle::new(4, 1, 3), Triangle(1, 3, 4));
    }
}
