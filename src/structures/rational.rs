use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::algebra::field::Field;
use crate::algebra::ring::{OrderedRing, Ring};
use crate::error::{Error, Result};
use crate::number_theory::modular::gcd;
use crate::structures::bigint::BigInteger;

/// Exact fraction of two [`BigInteger`]s.
///
/// Always kept in lowest terms with a positive denominator, so structural
/// equality is numeric equality. Zero is `0/1`.
///
/// # Example
///
/// ```
/// use algebrix::{Field, Rational, Ring};
///
/// let a = Rational::new(1, 3).unwrap();
/// let b = Rational::new(-2, 4).unwrap();
/// assert_eq!(b.to_string(), "-1/2");
/// assert_eq!(a.add(&b).unwrap(), Rational::new(-1, 6).unwrap());
/// assert_eq!(b.invert().unwrap(), Rational::from(-2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// Create `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInteger>, denominator: impl Into<BigInteger>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Reduce by the gcd and move the sign to the numerator.
    /// `denominator` must be non-zero.
    fn reduced(numerator: BigInteger, denominator: BigInteger) -> Self {
        let g = gcd(&numerator, &denominator);
        let (mut n, mut d) = (&numerator / &g, &denominator / &g);
        if d.is_negative() {
            n = -n;
            d = -d;
        }
        Self {
            numerator: n,
            denominator: d,
        }
    }

    /// The numerator, carrying the sign.
    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Check if the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Largest integer not greater than `self`.
    pub fn floor(&self) -> BigInteger {
        // denominator is positive, so this is floor division
        let q = &self.numerator / &self.denominator;
        if self.numerator.is_negative() && &q * &self.denominator != self.numerator {
            q.dec()
        } else {
            q
        }
    }
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Self {
            numerator: n,
            denominator: BigInteger::from(1),
        }
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Self::from(BigInteger::from(n))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64);

impl FromStr for Rational {
    type Err = Error;

    /// Parse `"n"` or `"n/d"` with decimal integers.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            None => Ok(Self::from(s.trim().parse::<BigInteger>()?)),
            Some((n, d)) => Self::new(
                n.trim().parse::<BigInteger>()?,
                d.trim().parse::<BigInteger>()?,
            ),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ---- implement Ring ---- */

impl Ring for Rational {
    fn add(&self, rhs: &Self) -> Result<Self> {
        let n = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        let d = &self.denominator * &rhs.denominator;
        Ok(Self::reduced(n, d))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        let n = &self.numerator * &rhs.numerator;
        let d = &self.denominator * &rhs.denominator;
        Ok(Self::reduced(n, d))
    }

    fn negate(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    fn zero(&self) -> Self {
        Self::from(0)
    }

    fn identity(&self) -> Self {
        Self::from(1)
    }
}

impl OrderedRing for Rational {}

impl Field for Rational {
    fn invert(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
