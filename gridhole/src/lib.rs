//! Connected components, holes and hole representatives of the Vietoris-Rips complex
//! of a set of integer grid points under the taxicab metric.
//!
//! The pipeline for one threshold is
//! 1. [`build_complex`](complex::build_complex) enumerates vertices, edges and triangles;
//! 2. [`component_count`](union_find::component_count) gives β0;
//! 3. [`fundamental_cycles`](cycles::fundamental_cycles) spans the cycle space of the 1-skeleton;
//! 4. [`compute_hole_cycles`](reduction::compute_hole_cycles) quotients by triangle boundaries,
//!    giving β1 and one representative per hole.
//!
//! All computation is exact over [`Z2`](fields::Z2) and nothing is retained between calls.
//! [`Evaluation::compute`] runs the whole pipeline and checks its preconditions.

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

pub mod columns;
pub mod complex;
pub mod cycles;
pub mod fields;
pub mod grid;
pub mod matrices;
pub mod reduction;
pub mod union_find;

use columns::Chain;
use complex::{build_complex, Edge, SimplicialComplex};
use grid::GridPoint;
use reduction::compute_hole_cycles;
use union_find::component_count;

#[derive(Debug, Error)]
pub enum GridholeError {
    #[error("column {0} is not in the domain of the matrix")]
    NotInDomain(usize),
    #[error("a face of column {0} is missing from the codomain")]
    NotInCodomain(usize),
    #[error("points {first} and {second} share coordinates {point:?}")]
    DuplicatePoint {
        first: usize,
        second: usize,
        point: GridPoint,
    },
    #[error("threshold must be at least 1")]
    NonPositiveThreshold,
}

/// Everything a renderer needs for one point set and threshold.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub complex: SimplicialComplex,
    pub betti_0: usize,
    pub betti_1: usize,
    /// One chain over the complex's edges per independent hole.
    pub holes: Vec<Chain>,
}

impl Evaluation {
    /// Rejects duplicate coordinates and a zero threshold, then runs the full pipeline.
    pub fn compute(points: &[GridPoint], epsilon: u32) -> Result<Self, GridholeError> {
        if epsilon == 0 {
            return Err(GridholeError::NonPositiveThreshold);
        }
        let mut seen = FxHashMap::default();
        for (second, point) in points.iter().enumerate() {
            if let Some(first) = seen.insert(*point, second) {
                return Err(GridholeError::DuplicatePoint {
                    first,
                    second,
                    point: *point,
                });
            }
        }

        let complex = build_complex(points, epsilon);
        let betti_0 = component_count(complex.n_vertices(), complex.edges());
        let holes = compute_hole_cycles(&complex);
        debug!("epsilon={epsilon}: beta_0={betti_0}, beta_1={}", holes.len());

        Ok(Self {
            complex,
            betti_0,
            betti_1: holes.len(),
            holes,
        })
    }

    /// The edges of each hole representative.
    pub fn hole_edges(&self) -> Vec<Vec<Edge>> {
        let edges = self.complex.edges();
        self.holes
            .iter()
            .map(|hole| hole.ones().map(|idx| edges[idx]).collect())
            .collect()
    }

    /// `V - E + T` of the complex truncated at dimension 2.
    pub fn euler_characteristic(&self) -> i64 {
        self.complex.n_vertices() as i64 - self.complex.n_edges() as i64
            + self.complex.n_triangles() as i64
    }
}
