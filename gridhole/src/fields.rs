//! Coefficients for chains over the two-element field.
//!
//! Only the non-zero element is representable; `0` is the absence of a term.
//! Adding two terms with the same index therefore yields `None`, which is exactly
//! symmetric difference when chains are stored as sets of indices.

use std::ops::{Add, Mul};

pub trait NonZeroCoefficient:
    Eq
    + Sized
    + Copy
    + Add<Option<Self>, Output = Option<Self>>
    + Add<Self, Output = Option<Self>>
    + Mul<Self, Output = Self>
{
    fn one() -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Z2;

impl Add<Z2> for Z2 {
    type Output = Option<Z2>;

    // 1 + 1 = 0
    fn add(self, _rhs: Z2) -> Self::Output {
        None
    }
}

impl Add<Option<Z2>> for Z2 {
    type Output = Option<Z2>;

    fn add(self, rhs: Option<Z2>) -> Self::Output {
        match rhs {
            None => Some(self),
            Some(rhs) => self + rhs,
        }
    }
}

impl Mul<Z2> for Z2 {
    type Output = Z2;

    fn mul(self, _rhs: Z2) -> Self::Output {
        Z2
    }
}

impl NonZeroCoefficient for Z2 {
    fn one() -> Self {
        Self
    }
}
