use crate::{columns::Chain, fields::Z2, GridholeError};

pub mod boundary;
#[cfg(test)]
mod tests;

pub use boundary::{EdgeBoundary, TriangleBoundary};

// ======== Abstract matrix oracle trait =======================

/// A sparse matrix over [`Z2`] whose columns are produced on demand.
///
/// Rows and columns are both indexed by simplex positions within one complex.
pub trait MatrixOracle {
    /// If you are unable to produce a column, return [`GridholeError::NotInDomain`].
    fn column(&self, col: usize) -> Result<impl Iterator<Item = (Z2, usize)>, GridholeError>;

    fn n_cols(&self) -> usize;

    /// Length of every chain built from a column.
    fn n_rows(&self) -> usize;

    fn build_chain(&self, col: usize) -> Result<Chain, GridholeError> {
        let mut output = Chain::zeros(self.n_rows());
        output.add_entries(self.column(col)?);
        Ok(output)
    }

    /// Image of an arbitrary chain over the column space.
    fn apply(&self, chain: &Chain) -> Result<Chain, GridholeError> {
        let mut output = Chain::zeros(self.n_rows());
        for col in chain.ones() {
            output.add_entries(self.column(col)?);
        }
        Ok(output)
    }
}

impl<'a, M> MatrixOracle for &'a M
where
    M: MatrixOracle,
{
    fn column(&self, col: usize) -> Result<impl Iterator<Item = (Z2, usize)>, GridholeError> {
        (*self).column(col)
    }

    fn n_cols(&self) -> usize {
        (*self).n_cols()
    }

    fn n_rows(&self) -> usize {
        (*self).n_rows()
    }
}
