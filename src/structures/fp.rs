use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;
#[cfg(feature = "serde")]
use rand::{rngs::StdRng, SeedableRng};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::config::PrimalityConfig;
use crate::error::{Error, Result};
use crate::number_theory::modular::mod_inverse;
use crate::number_theory::primes::{is_prime, is_probable_prime};
use crate::structures::bigint::BigInteger;

/// Prime field GF(p) for an arbitrary-precision prime `p`.
///
/// The modulus is validated once at construction and shared between the
/// field and all of its elements, so cloning is cheap. Two fields are equal
/// when their moduli are equal.
///
/// # Example
///
/// ```
/// use algebrix::{Field, PrimeField, Ring};
///
/// let f7 = PrimeField::new(7).unwrap();
/// let a = f7.element(3);
/// assert_eq!(a.invert().unwrap(), f7.element(5));
/// assert_eq!(a.multiply(&f7.element(5)).unwrap(), f7.one());
/// ```
#[derive(Clone)]
pub struct PrimeField {
    modulus: Arc<BigInteger>,
}

impl PrimeField {
    /// Create GF(p), checking `p` by exact trial division.
    ///
    /// # Errors
    ///
    /// `InvalidModulus` if `p < 2` or `p` is composite.
    pub fn new(p: impl Into<BigInteger>) -> Result<Self> {
        let p = p.into();
        if !is_prime(&p) {
            return Err(Error::InvalidModulus {
                modulus: p.to_string(),
            });
        }
        debug!("constructed prime field GF({})", p);
        Ok(Self {
            modulus: Arc::new(p),
        })
    }

    /// Create GF(p) for a modulus too large for trial division.
    ///
    /// The modulus is accepted when it passes [`is_probable_prime`] under
    /// `config`.
    ///
    /// # Errors
    ///
    /// `InvalidModulus` if `p` is rejected.
    pub fn new_probable<R: rand::Rng + ?Sized>(
        p: impl Into<BigInteger>,
        config: &PrimalityConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let p = p.into();
        if !is_probable_prime(&p, config, rng)? {
            return Err(Error::InvalidModulus {
                modulus: p.to_string(),
            });
        }
        debug!(
            "constructed prime field GF({}) from a probable prime ({} bits)",
            p,
            p.bit_length()
        );
        Ok(Self {
            modulus: Arc::new(p),
        })
    }

    /// The prime `p`.
    pub fn modulus(&self) -> &BigInteger {
        &self.modulus
    }

    /// The element `v mod p`; negative values wrap around.
    pub fn element(&self, v: impl Into<BigInteger>) -> PrimeFieldElement {
        PrimeFieldElement {
            value: v.into().reduce(&self.modulus),
            field: self.clone(),
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> PrimeFieldElement {
        self.element(0)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> PrimeFieldElement {
        self.element(1)
    }

    /// Uniformly random element.
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<PrimeFieldElement> {
        let value = BigInteger::random_below(&self.modulus, rng)?;
        Ok(self.element(value))
    }

    /// All `p` elements in increasing order of representative.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::PrimeField;
    ///
    /// let f5 = PrimeField::new(5).unwrap();
    /// let values: Vec<String> = f5.elements().map(|e| e.to_string()).collect();
    /// assert_eq!(values, ["0", "1", "2", "3", "4"]);
    /// ```
    pub fn elements(&self) -> impl Iterator<Item = PrimeFieldElement> + '_ {
        core::iter::successors(Some(self.zero()), move |e| {
            let next = e.value.inc();
            (next < *self.modulus).then(|| self.element(next))
        })
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

impl Hash for PrimeField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modulus.hash(state);
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

/// Element of a [`PrimeField`], stored as its representative in `[0, p)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeFieldElement {
    value: BigInteger,
    field: PrimeField,
}

impl PrimeFieldElement {
    /// Get the representative in `[0, p)`.
    pub fn value(&self) -> &BigInteger {
        &self.value
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "elements of {} and {}",
                self.field, other.field
            )))
        }
    }

    fn with_value(&self, value: BigInteger) -> Self {
        Self {
            value: value.reduce(&self.field.modulus),
            field: self.field.clone(),
        }
    }
}

impl fmt::Debug for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp<{}>({})", self.field.modulus, self.value)
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/* ---- implement Ring ---- */

impl Ring for PrimeFieldElement {
    fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.with_value(&self.value + &rhs.value))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.with_value(&self.value * &rhs.value))
    }

    fn negate(&self) -> Self {
        self.with_value(-&self.value)
    }

    fn zero(&self) -> Self {
        self.field.zero()
    }

    fn identity(&self) -> Self {
        self.field.one()
    }
}

/* ---- implement Field ---- */

impl Field for PrimeFieldElement {
    fn invert(&self) -> Result<Self> {
        if self.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        // the only non-zero element of GF(2) is 1
        if *self.field.modulus == BigInteger::from(2) {
            return Ok(self.clone());
        }
        let inv = mod_inverse(&self.value, &self.field.modulus)?;
        Ok(self.with_value(inv))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrimeField {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.modulus(), serializer)
    }
}

#[cfg(feature = "serde")]
const DESERIALIZE_SEED: u64 = 0x5eed_f1e1d;

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrimeField {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let modulus: BigInteger = serde::Deserialize::deserialize(deserializer)?;
        // exact below the search limit, Miller-Rabin above it
        let mut rng = StdRng::seed_from_u64(DESERIALIZE_SEED);
        Self::new_probable(modulus, &PrimalityConfig::default(), &mut rng)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ElementRepr {
    value: BigInteger,
    modulus: PrimeField,
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrimeFieldElement {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = ElementRepr {
            value: self.value.clone(),
            modulus: self.field.clone(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrimeFieldElement {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr: ElementRepr = serde::Deserialize::deserialize(deserializer)?;
        if repr.value.is_negative() || repr.value >= *repr.modulus.modulus() {
            return Err(serde::de::Error::custom(format!(
                "{} is not a canonical element of {}",
                repr.value, repr.modulus
            )));
        }
        Ok(repr.modulus.element(repr.value))
    }
}
