//! Incremental Gaussian elimination over [`Z2`](crate::fields::Z2), and the
//! homology computation built on top of it.
//!
//! A [`Gf2Basis`] stores at most one chain per pivot (highest set bit).
//! New chains are eliminated against the stored pivots, in descending order, before
//! being inserted. Stored chains are never revisited, so the basis is echelon but not
//! fully reduced; this is enough to answer span membership and rank.

pub mod homology;

pub use homology::*;

use log::trace;

use crate::columns::Chain;

#[derive(Debug, Clone)]
pub struct Gf2Basis {
    // pivots[i] is the stored chain whose highest set bit is i
    pivots: Vec<Option<Chain>>,
    rank: usize,
}

impl Gf2Basis {
    /// An empty basis for chains of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            pivots: vec![None; len],
            rank: 0,
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Eliminate every stored pivot from a copy of `chain`.
    /// The result is zero iff `chain` lies in the span of the basis.
    pub fn reduce(&self, chain: &Chain) -> Chain {
        let mut working = chain.clone();
        for (pivot, stored) in self.pivots.iter().enumerate().rev() {
            let Some(stored) = stored else {
                continue;
            };
            if working.contains(pivot) {
                working += stored;
            }
        }
        working
    }

    /// Insert `chain` if it is independent of the basis.
    ///
    /// Returns the reduced chain that was stored, or `None` if `chain` was already in
    /// the span.
    pub fn add(&mut self, chain: &Chain) -> Option<&Chain> {
        let reduced = self.reduce(chain);
        // Every stored pivot was cleared above, so this slot is free
        let lead = reduced.pivot()?;
        trace!("New basis vector with pivot {lead}");
        self.rank += 1;
        Some(&*self.pivots[lead].insert(reduced))
    }

}
