//! First homology of a [`SimplicialComplex`] over [`Z2`](crate::fields::Z2).
//!
//! The fundamental cycles span `Z1`, the triangle boundaries span `B1`.
//! Each cycle is reduced modulo `B1` and kept if it is independent of the
//! classes accepted so far, which yields a basis of `H1 = Z1 / B1`.

use log::debug;

use crate::{
    columns::Chain,
    complex::SimplicialComplex,
    cycles::fundamental_cycles,
    matrices::{MatrixOracle, TriangleBoundary},
    GridholeError,
};

use super::Gf2Basis;

/// Basis for the image of ∂2, i.e. the 1-cycles filled in by triangles.
pub fn boundary_basis(complex: &SimplicialComplex) -> Result<Gf2Basis, GridholeError> {
    let d2 = TriangleBoundary::new(complex);
    let mut basis = Gf2Basis::new(complex.n_edges());
    for col in 0..d2.n_cols() {
        basis.add(&d2.build_chain(col)?);
    }
    Ok(basis)
}

fn reduce_homology(complex: &SimplicialComplex) -> Result<Vec<Chain>, GridholeError> {
    if complex.n_edges() == 0 {
        return Ok(vec![]);
    }

    let boundaries = boundary_basis(complex)?;
    let cycles = fundamental_cycles(complex.n_vertices(), complex.edges());

    let mut h1_basis = Gf2Basis::new(complex.n_edges());
    let mut holes = vec![];
    for cycle in cycles.iter() {
        let reduced = boundaries.reduce(cycle);
        if let Some(representative) = h1_basis.add(&reduced) {
            holes.push(representative.clone());
        }
    }

    debug!(
        "Reduced {} cycles against {} boundaries: beta_1={}",
        cycles.len(),
        boundaries.rank(),
        holes.len()
    );
    Ok(holes)
}

/// One representative chain per independent hole, each of length `n_edges`.
/// Empty when the complex has no edges.
pub fn compute_hole_cycles(complex: &SimplicialComplex) -> Vec<Chain> {
    reduce_homology(complex).expect("Triangles of a built complex always have their edges")
}

/// β1, the number of independent holes.
pub fn first_betti_number(complex: &SimplicialComplex) -> usize {
    compute_hole_cycles(complex).len()
}
