/// A point on the integer grid, identified by its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}

impl GridPoint {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for GridPoint {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Taxicab distance between two grid points.
/// Widened to `u64` since the sum of two `u32` gaps can exceed `u32::MAX`.
pub fn distance(p: &GridPoint, q: &GridPoint) -> u64 {
    u64::from(p.row.abs_diff(q.row)) + u64::from(p.col.abs_diff(q.col))
}
