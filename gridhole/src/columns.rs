//! Packed bit-vector representation of chains over [`Z2`], indexed by simplex position.
use crate::fields::Z2;
use bitvec::prelude::*;
use std::{fmt::Debug, ops::AddAssign};

/// A chain over [`Z2`]: the set of indices whose coefficient is non-zero.
///
/// The length is fixed at construction and equals the number of simplices in the
/// dimension being indexed (edges, for 1-chains).
/// Addition is symmetric difference.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    bits: BitVec<u64, Lsb0>,
}

impl Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

impl Chain {
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    pub fn singleton(len: usize, index: usize) -> Self {
        let mut chain = Self::zeros(len);
        chain.toggle(index);
        chain
    }

    /// Repeated indices cancel in pairs.
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut chain = Self::zeros(len);
        for index in indices {
            chain.toggle(index);
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn toggle(&mut self, index: usize) {
        let current = self.bits[index];
        self.bits.set(index, !current);
    }

    /// Accumulate the terms of a sparse column into this chain.
    pub fn add_entries(&mut self, entries: impl Iterator<Item = (Z2, usize)>) {
        for (coeff, index) in entries {
            let existing = self.contains(index).then_some(Z2);
            self.bits.set(index, (coeff + existing).is_some());
        }
    }

    /// Highest index with a non-zero coefficient.
    pub fn pivot(&self) -> Option<usize> {
        self.bits.last_one()
    }

    /// Indices with non-zero coefficient, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

impl AddAssign<&Chain> for Chain {
    fn add_assign(&mut self, rhs: &Chain) {
        debug_assert_eq!(self.len(), rhs.len(), "Chains must index the same simplices");
        // Padding bits past `len` are zero in both, so whole-word xor is safe
        for (word, other) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(rhs.bits.as_raw_slice())
        {
            *word ^= *other;
        }
    }
}
