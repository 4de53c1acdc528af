use super::ring::{OrderedRing, Ring};
use crate::error::Result;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`.
    ///
    /// Returns [`Error::DivisionByZero`](crate::Error::DivisionByZero) for the
    /// zero element.
    fn invert(&self) -> Result<Self>;

    /// Division `self / rhs`, defined as `self * rhs⁻¹`.
    #[inline]
    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.multiply(&rhs.invert()?)
    }
}

/// A field with a compatible strict total order.
pub trait OrderedField: Field + OrderedRing {}

impl<T: Field + OrderedRing> OrderedField for T {}
