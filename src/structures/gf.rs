//! Finite fields GF(p^n) and irreducibility testing.
//!
//! This module provides:
//! - [`FiniteField`], which bundles a prime field with a validated
//!   irreducible characteristic polynomial
//! - [`FiniteFieldElement`], a residue class of GF(p)[x] modulo that
//!   polynomial
//! - [`is_irreducible`] and [`random_irreducible`] for building
//!   characteristic polynomials

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use log::{debug, trace};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::number_theory::primes::is_prime;
use crate::structures::bigint::BigInteger;
use crate::structures::fp::{PrimeField, PrimeFieldElement};
use crate::structures::poly::Polynomial;

type Poly = Polynomial<PrimeFieldElement>;

// ============================================================================
// Irreducibility
// ============================================================================

/// Test whether `f` is irreducible over `field`.
///
/// A polynomial f of degree n over GF(p) is irreducible iff
/// `gcd(f, x^(p^i) - x)` is constant for every `i` in `1..=n/2`.
/// `x^(p^i)` is built by raising the previous power to the p-th power
/// modulo f, which leaves each gcd unchanged since `gcd(f, g) = gcd(f, g mod f)`.
///
/// Returns `false` for constant and zero polynomials.
///
/// # Example
///
/// ```
/// use algebrix::{Polynomial, PrimeField};
/// use algebrix::structures::gf::is_irreducible;
///
/// let f17 = PrimeField::new(17).unwrap();
///
/// // x^2 - 3 is irreducible over F_17 (3 is not a quadratic residue)
/// let f = Polynomial::new(vec![f17.element(1), f17.element(0), f17.element(-3)]).unwrap();
/// assert!(is_irreducible(&f, &f17).unwrap());
///
/// // x^2 - 4 = (x - 2)(x + 2)
/// let g = Polynomial::new(vec![f17.element(1), f17.element(0), f17.element(-4)]).unwrap();
/// assert!(!is_irreducible(&g, &f17).unwrap());
/// ```
pub fn is_irreducible(f: &Poly, field: &PrimeField) -> Result<bool> {
    let n = match f.degree() {
        None | Some(0) => return Ok(false),
        Some(1) => return Ok(true),
        Some(d) => d,
    };

    let f = f.monic()?;
    let x = Poly::x(&field.one());
    let p = field.modulus();

    // h = x^(p^i) mod f
    let mut h = x.clone();
    for i in 1..=n / 2 {
        h = h.pow_mod(p, &f)?;
        let g = Poly::gcd(&f, &h.subtract(&x)?)?;
        if g.degree() != Some(0) {
            trace!("{} has a factor of degree dividing {}", f, i);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Find a random monic irreducible polynomial of degree `n` over `field`.
///
/// Candidates have leading coefficient one and the remaining coefficients
/// drawn uniformly; about one in `n` of them is irreducible, so around `n`
/// trials are expected.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0`.
pub fn random_irreducible<R: rand::Rng + ?Sized>(
    n: usize,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Poly> {
    if n == 0 {
        return Err(Error::invalid_argument(
            "irreducible polynomials have degree at least 1",
        ));
    }

    let mut trials = 0u64;
    loop {
        trials += 1;
        let mut coeffs = Vec::with_capacity(n + 1);
        for _ in 0..n {
            coeffs.push(field.random_element(rng)?);
        }
        coeffs.push(field.one());

        let candidate = Poly::from_ascending(coeffs)?;
        if is_irreducible(&candidate, field)? {
            debug!(
                "found irreducible {} of degree {} over {} after {} trials",
                candidate, n, field, trials
            );
            return Ok(candidate);
        }
        trace!("rejected reducible candidate {}", candidate);
    }
}

// ============================================================================
// Field
// ============================================================================

struct FieldDefinition {
    prime_field: PrimeField,
    dimension: usize,
    characteristic: Poly,
}

/// The finite field GF(p^n), realised as GF(p)[x] / (f) for a monic
/// irreducible `f` of degree `n`.
///
/// Fields are immutable and cheap to clone. Two fields are equal when they
/// have the same prime and the same characteristic polynomial, so fields of
/// equal size built from different polynomials do not mix.
///
/// # Example
///
/// ```
/// use algebrix::{Field, FiniteField, Ring};
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
/// let gf9 = FiniteField::with_size(9, &mut rng).unwrap();
/// assert_eq!(gf9.dimension(), 2);
///
/// let a = gf9.element(&[1, 2]).unwrap(); // x + 2
/// let a_inv = a.invert().unwrap();
/// assert_eq!(a.multiply(&a_inv).unwrap(), gf9.one());
/// ```
#[derive(Clone)]
pub struct FiniteField {
    inner: Arc<FieldDefinition>,
}

impl FiniteField {
    /// Create a field with `size` elements.
    ///
    /// A prime size gives GF(size) itself; otherwise `size` must be `p^e`
    /// for a prime `p`, found by checking integer `e`-th roots for every
    /// exponent up to the bit length of `size`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is not a prime power.
    pub fn with_size<R: rand::Rng + ?Sized>(size: impl Into<BigInteger>, rng: &mut R) -> Result<Self> {
        let size = size.into();
        let invalid = || Error::InvalidSize {
            size: size.to_string(),
        };
        if size < BigInteger::from(2) {
            return Err(invalid());
        }
        if is_prime(&size) {
            return Self::new(size, 1, rng);
        }

        let max_exponent = u32::try_from(size.bit_length()).unwrap_or(u32::MAX);
        for e in 2..=max_exponent {
            let root = size.nth_root(e)?;
            if root.pow(u64::from(e))? == size && is_prime(&root) {
                return Self::new(root, e as usize, rng);
            }
        }
        Err(invalid())
    }

    /// Create GF(p^n) with a randomly chosen irreducible characteristic.
    ///
    /// For `n == 1` the characteristic is `x`.
    ///
    /// # Errors
    ///
    /// - `InvalidModulus` if `p` is not prime
    /// - `InvalidArgument` if `n == 0`
    pub fn new<R: rand::Rng + ?Sized>(
        p: impl Into<BigInteger>,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let prime_field = PrimeField::new(p)?;
        check_dimension(n)?;
        let characteristic = if n == 1 {
            Poly::x(&prime_field.one())
        } else {
            random_irreducible(n, &prime_field, rng)?
        };
        Ok(Self::from_parts(prime_field, n, characteristic))
    }

    /// Create GF(p^n) from a given characteristic polynomial.
    ///
    /// # Errors
    ///
    /// - `InvalidModulus` if `p` is not prime
    /// - `TypeMismatch` if `characteristic` is not over GF(p)
    /// - `InvalidArgument` if `n == 0`, or `characteristic` is not monic of
    ///   degree `n`
    /// - `ReducibleCharacteristic` if `characteristic` factors over GF(p)
    pub fn with_characteristic(
        p: impl Into<BigInteger>,
        n: usize,
        characteristic: Poly,
    ) -> Result<Self> {
        let prime_field = PrimeField::new(p)?;
        check_dimension(n)?;

        if characteristic.field_zero().field() != &prime_field {
            return Err(Error::type_mismatch(format!(
                "characteristic {} is over {}, expected {}",
                characteristic,
                characteristic.field_zero().field(),
                prime_field
            )));
        }
        if characteristic.degree() != Some(n) {
            return Err(Error::invalid_argument(format!(
                "characteristic {} must have degree {}",
                characteristic, n
            )));
        }
        if !characteristic
            .leading_coeff()
            .map_or(false, Ring::is_identity)
        {
            return Err(Error::invalid_argument(format!(
                "characteristic {} must be monic",
                characteristic
            )));
        }
        if !is_irreducible(&characteristic, &prime_field)? {
            return Err(Error::ReducibleCharacteristic {
                characteristic: characteristic.to_string(),
                prime: prime_field.modulus().to_string(),
            });
        }

        Ok(Self::from_parts(prime_field, n, characteristic))
    }

    fn from_parts(prime_field: PrimeField, dimension: usize, characteristic: Poly) -> Self {
        debug!(
            "constructed GF({}^{}) with characteristic {}",
            prime_field.modulus(),
            dimension,
            characteristic
        );
        Self {
            inner: Arc::new(FieldDefinition {
                prime_field,
                dimension,
                characteristic,
            }),
        }
    }

    /// The prime `p`.
    pub fn prime(&self) -> &BigInteger {
        self.inner.prime_field.modulus()
    }

    /// The extension degree `n`.
    pub fn dimension(&self) -> usize {
        self.inner.dimension
    }

    /// Number of elements, `p^n`.
    pub fn size(&self) -> BigInteger {
        let mut size = BigInteger::from(1);
        for _ in 0..self.inner.dimension {
            size = size * self.prime();
        }
        size
    }

    /// The monic irreducible polynomial elements are reduced by.
    pub fn characteristic(&self) -> &Poly {
        &self.inner.characteristic
    }

    /// The base field GF(p).
    pub fn prime_field(&self) -> &PrimeField {
        &self.inner.prime_field
    }

    /// Element with the given coefficients, highest degree first.
    ///
    /// Exactly `n` coefficients are required; they are reduced modulo `p`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `coeffs.len() != n`.
    pub fn element(&self, coeffs: &[i64]) -> Result<FiniteFieldElement> {
        if coeffs.len() != self.dimension() {
            return Err(Error::invalid_argument(format!(
                "GF({}^{}) elements need {} coefficients, got {}",
                self.prime(),
                self.dimension(),
                self.dimension(),
                coeffs.len()
            )));
        }
        let fp = self.prime_field();
        let value = Poly::new(coeffs.iter().map(|&c| fp.element(c)).collect())?;
        Ok(self.wrap(value))
    }

    /// Element represented by `f mod characteristic`.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `f` is not over GF(p).
    pub fn element_from_polynomial(&self, f: &Poly) -> Result<FiniteFieldElement> {
        let value = f.modulo(self.characteristic())?;
        Ok(self.wrap(value))
    }

    /// The additive identity.
    pub fn zero(&self) -> FiniteFieldElement {
        self.wrap(Poly::zero_over(&self.prime_field().one()))
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FiniteFieldElement {
        self.wrap(Poly::constant(self.prime_field().one()))
    }

    /// Uniformly random element.
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<FiniteFieldElement> {
        let fp = self.prime_field();
        let coeffs = (0..self.dimension())
            .map(|_| fp.random_element(rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.wrap(Poly::from_ascending(coeffs)?))
    }

    fn wrap(&self, value: Poly) -> FiniteFieldElement {
        FiniteFieldElement {
            value,
            field: self.clone(),
        }
    }
}

fn check_dimension(n: usize) -> Result<()> {
    if n == 0 {
        Err(Error::invalid_argument("field dimension must be at least 1"))
    } else {
        Ok(())
    }
}

impl PartialEq for FiniteField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.prime_field == other.inner.prime_field
                && self.inner.characteristic == other.inner.characteristic)
    }
}

impl Eq for FiniteField {}

impl Hash for FiniteField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.prime_field.hash(state);
        self.inner.characteristic.hash(state);
    }
}

impl fmt::Debug for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF({}^{}) mod {}",
            self.prime(),
            self.dimension(),
            self.characteristic()
        )
    }
}

impl fmt::Display for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.prime(), self.dimension())
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Element of a [`FiniteField`]: a polynomial over GF(p) of degree below `n`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FiniteFieldElement {
    value: Poly,
    field: FiniteField,
}

impl FiniteFieldElement {
    /// The reduced polynomial representing this element.
    pub fn value(&self) -> &Poly {
        &self.value
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &FiniteField {
        &self.field
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "elements of {:?} and {:?}",
                self.field, other.field
            )))
        }
    }
}

impl Ring for FiniteFieldElement {
    /// Sums of reduced polynomials stay below the characteristic's degree,
    /// so no reduction is needed.
    fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.field.wrap(self.value.add(&rhs.value)?))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        let product = self.value.multiply(&rhs.value)?;
        Ok(self
            .field
            .wrap(product.modulo(self.field.characteristic())?))
    }

    fn negate(&self) -> Self {
        self.field.wrap(self.value.negate())
    }

    fn zero(&self) -> Self {
        self.field.zero()
    }

    fn identity(&self) -> Self {
        self.field.one()
    }
}

impl Field for FiniteFieldElement {
    fn invert(&self) -> Result<Self> {
        if self.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let inv = self.value.modulo_inverse(self.field.characteristic())?;
        Ok(self.field.wrap(inv))
    }
}

impl fmt::Debug for FiniteFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field, self.value)
    }
}

impl fmt::Display for FiniteFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0xf1e1d)
    }

    fn poly(field: &PrimeField, coeffs: &[i64]) -> Poly {
        Poly::new(coeffs.iter().map(|&c| field.element(c)).collect()).unwrap()
    }

    fn all_elements(field: &FiniteField) -> Vec<FiniteFieldElement> {
        let n = field.dimension();
        let p = field.prime().to_i64().unwrap();
        let count = p.pow(n as u32);
        (0..count)
            .map(|mut k| {
                let mut coeffs = vec![0i64; n];
                for c in coeffs.iter_mut().rev() {
                    *c = k % p;
                    k /= p;
                }
                field.element(&coeffs).unwrap()
            })
            .collect()
    }

    #[test]
    fn irreducible_over_gf2() {
        let f2 = PrimeField::new(2).unwrap();
        assert!(is_irreducible(&poly(&f2, &[1, 1, 1]), &f2).unwrap());
        assert!(!is_irreducible(&poly(&f2, &[1, 0, 1]), &f2).unwrap());
        assert!(is_irreducible(&poly(&f2, &[1, 0, 1, 1]), &f2).unwrap());
        assert!(!is_irreducible(&poly(&f2, &[1, 1, 1, 1]), &f2).unwrap());
        assert!(is_irreducible(&poly(&f2, &[1, 0, 0, 1, 1]), &f2).unwrap());
        // (x^2 + x + 1)^2 has no roots but is reducible
        assert!(!is_irreducible(&poly(&f2, &[1, 0, 1, 0, 1]), &f2).unwrap());
    }

    #[test]
    fn irreducible_edge_cases() {
        let f5 = PrimeField::new(5).unwrap();
        assert!(!is_irreducible(&poly(&f5, &[0]), &f5).unwrap());
        assert!(!is_irreducible(&poly(&f5, &[3]), &f5).unwrap());
        assert!(is_irreducible(&poly(&f5, &[3, 1]), &f5).unwrap());
        // non-monic input is tested up to a unit
        assert!(is_irreducible(&poly(&f5, &[2, 0, 4]), &f5).unwrap()); // 2(x^2 + 2)
    }

    #[test]
    fn random_irreducible_has_no_roots() {
        let mut rng = rng();
        let f3 = PrimeField::new(3).unwrap();
        for n in 1..=6 {
            let f = random_irreducible(n, &f3, &mut rng).unwrap();
            assert_eq!(f.degree(), Some(n));
            assert!(f.leading_coeff().unwrap().is_identity());
            assert!(is_irreducible(&f, &f3).unwrap());
            if n > 1 {
                for a in f3.elements() {
                    assert!(!f.evaluate(&a).unwrap().is_zero());
                }
            }
        }
        assert!(random_irreducible(0, &f3, &mut rng).is_err());
    }

    #[test]
    fn size_four() {
        let gf4 = FiniteField::with_size(4, &mut rng()).unwrap();
        assert_eq!(gf4.prime(), &BigInteger::from(2));
        assert_eq!(gf4.dimension(), 2);
        assert_eq!(gf4.size(), BigInteger::from(4));
        // x^2 + x + 1 is the only irreducible quadratic over GF(2)
        assert_eq!(gf4.characteristic(), &poly(gf4.prime_field(), &[1, 1, 1]));

        for e in all_elements(&gf4).into_iter().filter(|e| !e.is_zero()) {
            let inv = e.invert().unwrap();
            assert!(e.multiply(&inv).unwrap().is_identity(), "{}", e);
        }
    }

    #[test]
    fn with_size_factors_prime_powers() {
        let mut rng = rng();
        for (size, p, n) in [(7, 7, 1), (9, 3, 2), (27, 3, 3), (1024, 2, 10), (243, 3, 5), (121, 11, 2)] {
            let field = FiniteField::with_size(size, &mut rng).unwrap();
            assert_eq!(field.prime(), &BigInteger::from(p), "size {}", size);
            assert_eq!(field.dimension(), n, "size {}", size);
            assert_eq!(field.size(), BigInteger::from(size));
        }
    }

    #[test]
    fn with_size_rejects_non_prime_powers() {
        let mut rng = rng();
        for size in [0, 1, 6, 12, 100, 36] {
            assert_eq!(
                FiniteField::with_size(size, &mut rng).unwrap_err(),
                Error::InvalidSize {
                    size: size.to_string()
                }
            );
        }
    }

    #[test]
    fn new_validates_arguments() {
        let mut rng = rng();
        assert!(matches!(
            FiniteField::new(4, 2, &mut rng),
            Err(Error::InvalidModulus { .. })
        ));
        assert!(matches!(
            FiniteField::new(3, 0, &mut rng),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn dimension_one_matches_prime_field() {
        let gf2 = FiniteField::new(2, 1, &mut rng()).unwrap();
        let f2 = PrimeField::new(2).unwrap();
        assert_eq!(gf2.characteristic(), &Poly::x(&f2.one()));

        for a in 0..2i64 {
            for b in 0..2i64 {
                let x = gf2.element(&[a]).unwrap();
                let y = gf2.element(&[b]).unwrap();
                let sum = f2.element(a).add(&f2.element(b)).unwrap();
                let product = f2.element(a).multiply(&f2.element(b)).unwrap();
                assert_eq!(x.add(&y).unwrap().value().coeff(0), sum);
                assert_eq!(x.multiply(&y).unwrap().value().coeff(0), product);
            }
        }
        let one = gf2.one();
        assert_eq!(one.invert().unwrap(), one);
        assert_eq!(gf2.zero().invert(), Err(Error::DivisionByZero));
    }

    #[test]
    fn with_characteristic_validation() {
        let f2 = PrimeField::new(2).unwrap();
        let f3 = PrimeField::new(3).unwrap();

        let field = FiniteField::with_characteristic(2, 2, poly(&f2, &[1, 1, 1])).unwrap();
        assert_eq!(field.size(), BigInteger::from(4));

        assert!(matches!(
            FiniteField::with_characteristic(2, 2, poly(&f2, &[1, 0, 1])),
            Err(Error::ReducibleCharacteristic { .. })
        ));
        assert!(matches!(
            FiniteField::with_characteristic(2, 3, poly(&f2, &[1, 1, 1])),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            FiniteField::with_characteristic(3, 2, poly(&f3, &[2, 0, 1])),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            FiniteField::with_characteristic(3, 2, poly(&f2, &[1, 1, 1])),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            FiniteField::with_characteristic(6, 2, poly(&f2, &[1, 1, 1])),
            Err(Error::InvalidModulus { .. })
        ));
    }

    #[test]
    fn element_factory() {
        let f3 = PrimeField::new(3).unwrap();
        let gf9 = FiniteField::with_characteristic(3, 2, poly(&f3, &[1, 0, 1])).unwrap();
        assert!(matches!(gf9.element(&[1]), Err(Error::InvalidArgument { .. })));
        assert!(matches!(gf9.element(&[1, 2, 0]), Err(Error::InvalidArgument { .. })));

        let a = gf9.element(&[4, -1]).unwrap();
        assert_eq!(a, gf9.element(&[1, 2]).unwrap());
        assert!(gf9.element(&[0, 0]).unwrap().is_zero());
        assert!(gf9.element(&[0, 1]).unwrap().is_identity());

        // x^2 = -1 modulo x^2 + 1
        let x_squared = gf9.element_from_polynomial(&poly(&f3, &[1, 0, 0])).unwrap();
        assert_eq!(x_squared, gf9.element(&[0, 2]).unwrap());
    }

    #[test]
    fn multiplicative_group_order() {
        let f3 = PrimeField::new(3).unwrap();
        let gf9 = FiniteField::with_characteristic(3, 2, poly(&f3, &[1, 1, 2])).unwrap();
        for e in all_elements(&gf9).into_iter().filter(|e| !e.is_zero()) {
            assert!(e.pow(8).unwrap().is_identity(), "{}", e);
        }
    }

    #[test]
    fn fields_with_different_characteristics_do_not_mix() {
        let f3 = PrimeField::new(3).unwrap();
        let a = FiniteField::with_characteristic(3, 2, poly(&f3, &[1, 0, 1])).unwrap();
        let b = FiniteField::with_characteristic(3, 2, poly(&f3, &[1, 1, 2])).unwrap();
        assert_ne!(a, b);
        let x = a.element(&[1, 0]).unwrap();
        let y = b.element(&[1, 0]).unwrap();
        assert!(matches!(x.add(&y), Err(Error::TypeMismatch { .. })));
        assert!(matches!(x.multiply(&y), Err(Error::TypeMismatch { .. })));

        // same parameters built twice compare equal
        let c = FiniteField::with_characteristic(3, 2, poly(&f3, &[1, 0, 1])).unwrap();
        assert_eq!(a, c);
        assert!(x.add(&c.element(&[2, 0]).unwrap()).unwrap().is_zero());
    }

    #[test]
    fn random_elements_cover_small_field() {
        let mut rng = rng();
        let gf4 = FiniteField::with_size(4, &mut rng).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let e = gf4.random_element(&mut rng).unwrap();
            assert!(e.value().degree().map_or(true, |d| d < 2));
            seen.insert(e);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn display() {
        let f2 = PrimeField::new(2).unwrap();
        let gf4 = FiniteField::with_characteristic(2, 2, poly(&f2, &[1, 1, 1])).unwrap();
        assert_eq!(gf4.to_string(), "GF(2^2)");
        assert_eq!(gf4.element(&[1, 1]).unwrap().to_string(), "x + 1");
        assert_eq!(gf4.zero().to_string(), "0");
    }
}
