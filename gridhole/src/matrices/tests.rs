// ======== Tests ==============================================

use crate::columns::Chain;
use crate::complex::build_complex;
use crate::grid::GridPoint;
use crate::GridholeError;

use super::{EdgeBoundary, MatrixOracle, TriangleBoundary};

fn blob() -> Vec<GridPoint> {
    [(0, 0), (0, 1), (1, 0), (1, 1), (2, 1), (1, 2), (3, 3)]
        .into_iter()
        .map(GridPoint::from)
        .collect()
}

#[test]
fn test_edge_boundary_columns() {
    let complex = build_complex(&blob(), 1);
    let d1 = EdgeBoundary::new(&complex);
    assert_eq!(d1.n_cols(), complex.n_edges());
    assert_eq!(d1.n_rows(), 7);
    for (idx, edge) in complex.edges().iter().enumerate() {
        let column = d1.build_chain(idx).unwrap();
        assert_eq!(column, Chain::from_indices(7, [edge.0, edge.1]));
    }
}

#[test]
fn test_boundary_of_boundary_vanishes() {
    let complex = build_complex(&blob(), 2);
    assert!(complex.n_triangles() > 0);
    let d1 = EdgeBoundary::new(&complex);
    let d2 = TriangleBoundary::new(&complex);
    for col in 0..d2.n_cols() {
        let boundary = d2.build_chain(col).unwrap();
        assert_eq!(boundary.count_ones(), 3);
        assert!(d1.apply(&boundary).unwrap().is_zero());
    }
}

#[test]
fn test_unknown_column() {
    let complex = build_complex(&blob(), 1);
    let d2 = TriangleBoundary::new(&complex);
    let missing = d2.n_cols();
    assert!(matches!(
        d2.build_chain(missing),
        Err(GridholeError::NotInDomain(col)) if col == missing
    ));
    let d1 = EdgeBoundary::new(&complex);
    assert!(d1.column(complex.n_edges()).is_err());
}
