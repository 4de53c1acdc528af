use core::fmt;

use crate::error::Result;

/// A (commutative) ring whose elements know which ring they belong to.
///
/// Structures such as `Z/pZ` or `GF(p^n)` are chosen at runtime, so the
/// additive and multiplicative identities are produced from an existing
/// element rather than from associated constants: `a.zero()` is the zero of
/// the ring `a` lives in.
///
/// Binary operations are fallible. Combining two elements that belong to
/// different rings (different modulus, different characteristic polynomial)
/// returns [`Error::TypeMismatch`](crate::Error::TypeMismatch).
///
/// Laws (tested for every implementation in `tests/ring_contract.rs`):
/// - (R, +) is an abelian group with identity `zero`
/// - (R, ·) is a commutative monoid with identity `identity`
/// - multiplication distributes over addition
pub trait Ring: Sized + Clone + PartialEq + fmt::Debug {
    /// Ring addition `self + rhs`.
    fn add(&self, rhs: &Self) -> Result<Self>;

    /// Ring multiplication `self * rhs`.
    fn multiply(&self, rhs: &Self) -> Result<Self>;

    /// Additive inverse `-self`.
    fn negate(&self) -> Self;

    /// The additive identity of the ring `self` belongs to.
    fn zero(&self) -> Self;

    /// The multiplicative identity of the ring `self` belongs to.
    fn identity(&self) -> Self;

    /// `self - rhs`, defined as `self + (-rhs)`.
    #[inline]
    fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.add(&rhs.negate())
    }

    /// `self * self`.
    #[inline]
    fn square(&self) -> Result<Self> {
        self.multiply(self)
    }

    /// Check whether `self` equals the zero of its ring.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == self.zero()
    }

    /// Check whether `self` equals the identity of its ring.
    #[inline]
    fn is_identity(&self) -> bool {
        *self == self.identity()
    }

    /// Integer multiple `k · self` using double-and-add.
    ///
    /// Walks the bits of `k` from the second most significant one down,
    /// doubling at every step and adding `self` when the bit is set, so the
    /// cost is O(log k) additions. `scale(0)` is the zero of the ring.
    fn scale(&self, k: u64) -> Result<Self> {
        if k == 0 {
            return Ok(self.zero());
        }

        let mut acc = self.clone();
        for bit in (0..top_bit(k)).rev() {
            acc = acc.add(&acc)?;
            if (k >> bit) & 1 == 1 {
                acc = acc.add(self)?;
            }
        }
        Ok(acc)
    }

    /// Integer power `self^k` using square-and-multiply.
    ///
    /// Same bit walk as [`Ring::scale`], squaring instead of doubling.
    /// `pow(0)` is the identity of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::{BigInteger, Ring};
    ///
    /// let three = BigInteger::from(3);
    /// assert_eq!(three.pow(5).unwrap(), BigInteger::from(243));
    /// assert_eq!(three.pow(0).unwrap(), BigInteger::from(1));
    /// ```
    fn pow(&self, k: u64) -> Result<Self> {
        if k == 0 {
            return Ok(self.identity());
        }

        let mut acc = self.clone();
        for bit in (0..top_bit(k)).rev() {
            acc = acc.square()?;
            if (k >> bit) & 1 == 1 {
                acc = acc.multiply(self)?;
            }
        }
        Ok(acc)
    }
}

/// A ring with a strict total order compatible with its equality.
///
/// The order itself comes from [`Ord`]; the named comparisons mirror the
/// vocabulary used by generic numeric code.
pub trait OrderedRing: Ring + Ord {
    /// `self < other`.
    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    /// `self > other`.
    #[inline]
    fn greater_than(&self, other: &Self) -> bool {
        self > other
    }

    /// `self <= other`.
    #[inline]
    fn less_than_or_equal(&self, other: &Self) -> bool {
        self == other || self.less_than(other)
    }

    /// `self >= other`.
    #[inline]
    fn greater_than_or_equal(&self, other: &Self) -> bool {
        self == other || self.greater_than(other)
    }
}

/// Index of the most significant set bit of a non-zero `k`.
#[inline]
fn top_bit(k: u64) -> u32 {
    63 - k.leading_zeros()
}
