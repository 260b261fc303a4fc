//! Boundary maps of a [`SimplicialComplex`] as matrix oracles.
//!
//! Over [`Z2`] there are no signs to track, so each column is just the set of faces.

use crate::{
    complex::SimplicialComplex,
    fields::{NonZeroCoefficient, Z2},
    GridholeError,
};

use super::MatrixOracle;

/// ∂1: columns indexed by edges, rows by vertices.
#[derive(Clone, Copy)]
pub struct EdgeBoundary<'a> {
    complex: &'a SimplicialComplex,
}

impl<'a> EdgeBoundary<'a> {
    pub fn new(complex: &'a SimplicialComplex) -> Self {
        Self { complex }
    }
}

impl<'a> MatrixOracle for EdgeBoundary<'a> {
    fn column(&self, col: usize) -> Result<impl Iterator<Item = (Z2, usize)>, GridholeError> {
        let edge = self
            .complex
            .edges()
            .get(col)
            .ok_or(GridholeError::NotInDomain(col))?;
        Ok(edge.vertices().into_iter().map(|v| (Z2::one(), v)))
    }

    fn n_cols(&self) -> usize {
        self.complex.n_edges()
    }

    fn n_rows(&self) -> usize {
        self.complex.n_vertices()
    }
}

/// ∂2: columns indexed by triangles, rows by edges.
#[derive(Clone, Copy)]
pub struct TriangleBoundary<'a> {
    complex: &'a SimplicialComplex,
}

impl<'a> TriangleBoundary<'a> {
    pub fn new(complex: &'a SimplicialComplex) -> Self {
        Self { complex }
    }
}

impl<'a> MatrixOracle for TriangleBoundary<'a> {
    fn column(&self, col: usize) -> Result<impl Iterator<Item = (Z2, usize)>, GridholeError> {
        let triangle = self
            .complex
            .triangles()
            .get(col)
            .ok_or(GridholeError::NotInDomain(col))?;
        let edges = self
            .complex
            .triangle_edges(triangle)
            .ok_or(GridholeError::NotInCodomain(col))?;
        Ok(edges.into_iter().map(|e| (Z2::one(), e)))
    }

    fn n_cols(&self) -> usize {
        self.complex.n_triangles()
    }

    fn n_rows(&self) -> usize {
        self.complex.n_edges()
    }
}
