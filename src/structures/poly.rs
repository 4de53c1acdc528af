use core::fmt;
use core::hash::{Hash, Hasher};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::structures::bigint::BigInteger;

/// Polynomial with coefficients in a field `F`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`. [`Polynomial::new`] takes them
/// highest degree first, the way polynomials are written down.
///
/// The zero polynomial has an empty coefficient vector and degree `None`.
/// Every polynomial keeps the zero of its coefficient field, so the zero and
/// identity polynomials can be produced even from the zero polynomial.
#[derive(Clone, PartialEq)]
pub struct Polynomial<F: Field> {
    coeffs: Vec<F>,
    zero: F,
}

impl<F: Field> Polynomial<F> {
    /// Create a polynomial from coefficients, highest degree first.
    ///
    /// Leading zeros are removed.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `coeffs` is empty
    /// - `TypeMismatch` if the coefficients come from different fields
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::{Polynomial, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // x^2 + 2x + 3
    /// let p = Polynomial::new(vec![f17.element(1), f17.element(2), f17.element(3)]).unwrap();
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p.to_string(), "x^2 + 2*x + 3");
    /// ```
    pub fn new(mut coeffs: Vec<F>) -> Result<Self> {
        coeffs.reverse();
        Self::from_ascending(coeffs)
    }

    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Trailing zeros are removed.
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::new`].
    pub fn from_ascending(coeffs: Vec<F>) -> Result<Self> {
        let zero = match coeffs.first() {
            Some(c) => c.zero(),
            None => {
                return Err(Error::invalid_argument(
                    "polynomial needs at least one coefficient",
                ))
            }
        };
        if let Some(c) = coeffs.iter().find(|c| c.zero() != zero) {
            return Err(Error::type_mismatch(format!(
                "coefficient {:?} is not in the field of {:?}",
                c, zero
            )));
        }

        let mut poly = Self { coeffs, zero };
        poly.normalize();
        Ok(poly)
    }

    /// The zero polynomial over the field of `sample`.
    pub fn zero_over(sample: &F) -> Self {
        Self {
            coeffs: Vec::new(),
            zero: sample.zero(),
        }
    }

    /// Create a constant polynomial.
    pub fn constant(c: F) -> Self {
        Self::monomial(c, 0)
    }

    /// The polynomial `x` over the field of `sample`.
    pub fn x(sample: &F) -> Self {
        Self::monomial(sample.identity(), 1)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::{Polynomial, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// let m = Polynomial::monomial(f17.element(3), 2); // 3x^2
    /// assert_eq!(m.degree(), Some(2));
    /// assert_eq!(m.evaluate(&f17.element(2)).unwrap(), f17.element(12));
    /// ```
    pub fn monomial(c: F, n: usize) -> Self {
        let zero = c.zero();
        if c.is_zero() {
            return Self {
                coeffs: Vec::new(),
                zero,
            };
        }
        let mut coeffs = vec![zero.clone(); n + 1];
        coeffs[n] = c;
        Self { coeffs, zero }
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last().map_or(false, |c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&F> {
        self.coeffs.last()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> F {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.zero.clone())
    }

    /// Get a slice of all coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// The zero of the coefficient field.
    pub fn field_zero(&self) -> &F {
        &self.zero
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.zero == other.zero {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "polynomials over different fields ({:?} vs {:?})",
                self.zero, other.zero
            )))
        }
    }

    fn check_field_of(&self, c: &F) -> Result<()> {
        if c.zero() == self.zero {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "{:?} is not in the coefficient field of the polynomial",
                c
            )))
        }
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `x` is from a different field.
    pub fn evaluate(&self, x: &F) -> Result<F> {
        self.check_field_of(x)?;
        let mut result = self.zero.clone();
        for c in self.coeffs.iter().rev() {
            result = result.multiply(x)?.add(c)?;
        }
        Ok(result)
    }

    /// Multiply every coefficient by `c`.
    pub fn scalar_multiply(&self, c: &F) -> Result<Self> {
        self.check_field_of(c)?;
        let coeffs = self
            .coeffs
            .iter()
            .map(|a| a.multiply(c))
            .collect::<Result<Vec<_>>>()?;
        let mut poly = Self {
            coeffs,
            zero: self.zero.clone(),
        };
        poly.normalize();
        Ok(poly)
    }

    /// Multiply by `x^k`.
    pub fn shift(&self, k: usize) -> Self {
        if self.coeffs.is_empty() {
            return self.clone();
        }
        let mut coeffs = vec![self.zero.clone(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self {
            coeffs,
            zero: self.zero.clone(),
        }
    }

    /// Scale so the leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    pub fn monic(&self) -> Result<Self> {
        match self.leading_coeff() {
            None => Ok(self.clone()),
            Some(lc) if lc.is_identity() => Ok(self.clone()),
            Some(lc) => self.scalar_multiply(&lc.invert()?),
        }
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` if the divisor is zero
    /// - `TypeMismatch` if the polynomials are over different fields
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::{Polynomial, PrimeField, Ring};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Polynomial::new(vec![f17.element(1), f17.element(2), f17.element(1)]).unwrap();
    /// let divisor = Polynomial::new(vec![f17.element(1), f17.element(1)]).unwrap();
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.check_same_field(divisor)?;
        let (divisor_deg, divisor_lc) = match (divisor.degree(), divisor.leading_coeff()) {
            (Some(d), Some(lc)) => (d, lc),
            _ => return Err(Error::DivisionByZero),
        };

        let zero_poly = Self::zero_over(&self.zero);
        match self.degree() {
            None => return Ok((zero_poly.clone(), zero_poly)),
            Some(d) if d < divisor_deg => return Ok((zero_poly, self.clone())),
            _ => {}
        }

        let lc_inv = divisor_lc.invert()?;
        let mut remainder = self.clone();
        let mut quotient = vec![self.zero.clone(); self.coeffs.len() - divisor.coeffs.len() + 1];

        while let (Some(rem_deg), Some(rem_lc)) = (remainder.degree(), remainder.leading_coeff()) {
            if rem_deg < divisor_deg {
                break;
            }

            let coeff = rem_lc.multiply(&lc_inv)?;
            let deg_diff = rem_deg - divisor_deg;

            // remainder -= coeff * x^deg_diff * divisor
            for (i, d) in divisor.coeffs.iter().enumerate() {
                let slot = &mut remainder.coeffs[i + deg_diff];
                *slot = slot.subtract(&coeff.multiply(d)?)?;
            }
            quotient[deg_diff] = coeff;
            remainder.normalize();
        }

        let mut quotient = Self {
            coeffs: quotient,
            zero: self.zero.clone(),
        };
        quotient.normalize();
        Ok((quotient, remainder))
    }

    /// Quotient of Euclidean division.
    pub fn truncate(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of Euclidean division.
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Greatest common divisor, made monic.
    ///
    /// `gcd(0, 0)` is the zero polynomial.
    pub fn gcd(a: &Self, b: &Self) -> Result<Self> {
        a.check_same_field(b)?;
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let r = a.modulo(&b)?;
            a = b;
            b = r;
        }
        a.monic()
    }

    /// Extended Euclidean algorithm for polynomials.
    ///
    /// Returns `(g, s, t)` such that `g = gcd(a, b) = s*a + t*b` with `g`
    /// monic, or all three zero when both inputs are zero.
    ///
    /// Quotients are collected on a stack during the reduction and unwound
    /// afterwards with `(s, t) <- (t, s - q*t)`.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::{Polynomial, PrimeField, Ring};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// let a = Polynomial::new(vec![f17.element(1), f17.element(2), f17.element(1)]).unwrap();
    /// let b = Polynomial::new(vec![f17.element(1), f17.element(1)]).unwrap();
    ///
    /// let (g, s, t) = Polynomial::extended_gcd(&a, &b).unwrap();
    ///
    /// // Verify: s*a + t*b = g
    /// let check = s.multiply(&a).unwrap().add(&t.multiply(&b).unwrap()).unwrap();
    /// assert_eq!(check, g);
    /// ```
    pub fn extended_gcd(a: &Self, b: &Self) -> Result<(Self, Self, Self)> {
        a.check_same_field(b)?;
        let zero_poly = Self::zero_over(&a.zero);

        let mut a = a.clone();
        let mut b = b.clone();
        let mut quotients = Vec::new();
        while !b.is_zero() {
            let (q, r) = a.div_rem(&b)?;
            quotients.push(q);
            a = b;
            b = r;
        }

        let (g, mut s, mut t) = match a.leading_coeff() {
            None => return Ok((zero_poly.clone(), zero_poly.clone(), zero_poly)),
            Some(lc) => {
                let lc_inv = lc.invert()?;
                (a.scalar_multiply(&lc_inv)?, Self::constant(lc_inv), zero_poly)
            }
        };

        // g = s * a_k + t * b_k, walk back up to the inputs
        while let Some(q) = quotients.pop() {
            let next_t = s.subtract(&q.multiply(&t)?)?;
            s = t;
            t = next_t;
        }

        Ok((g, s, t))
    }

    /// Inverse of `self` modulo `m`.
    ///
    /// # Errors
    ///
    /// `NoInverse` if `m` is zero or `gcd(self, m)` is not constant.
    pub fn modulo_inverse(&self, m: &Self) -> Result<Self> {
        let no_inverse = || Error::no_inverse(format!("{:?}", self), format!("{:?}", m));
        if m.is_zero() {
            return Err(no_inverse());
        }
        let (g, s, _) = Self::extended_gcd(self, m)?;
        if g.degree() != Some(0) {
            return Err(no_inverse());
        }
        s.modulo(m)
    }

    /// Compute `self^exp mod modulus` using repeated squaring.
    ///
    /// Consumes the binary digits of `exp` after the leading one, reducing
    /// modulo `modulus` after every product.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a negative exponent
    /// - `DivisionByZero` if `modulus` is zero
    pub fn pow_mod(&self, exp: &BigInteger, modulus: &Self) -> Result<Self> {
        if exp.is_negative() {
            return Err(Error::invalid_argument(format!(
                "negative exponent {} in polynomial power",
                exp
            )));
        }
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if exp.is_zero() {
            return self.identity().modulo(modulus);
        }

        let base = self.modulo(modulus)?;
        let mut acc = base.clone();
        for bit in exp.binary_digits().into_iter().skip(1) {
            acc = acc.square()?.modulo(modulus)?;
            if bit {
                acc = acc.multiply(&base)?.modulo(modulus)?;
            }
        }
        Ok(acc)
    }

    fn fmt_terms(
        &self,
        f: &mut fmt::Formatter<'_>,
        write_coeff: impl Fn(&F, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if i == 0 {
                write_coeff(coeff, f)?;
                continue;
            }
            if !coeff.is_identity() {
                write_coeff(coeff, f)?;
                write!(f, "*")?;
            }
            match i {
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }

        Ok(())
    }
}

/* ---- implement Ring ---- */

impl<F: Field> Ring for Polynomial<F> {
    fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(max_len);

        for i in 0..max_len {
            coeffs.push(self.coeff(i).add(&rhs.coeff(i))?);
        }

        let mut poly = Self {
            coeffs,
            zero: self.zero.clone(),
        };
        poly.normalize();
        Ok(poly)
    }

    /// Naive O(n*m) convolution: for each non-zero coefficient `b_j` of the
    /// right operand, add `b_j * x^j * self`.
    fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Ok(self.zero());
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![self.zero.clone(); n + m - 1];

        for (j, b) in rhs.coeffs.iter().enumerate() {
            if b.is_zero() {
                continue;
            }
            for (i, a) in self.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].add(&a.multiply(b)?)?;
            }
        }

        let mut poly = Self {
            coeffs,
            zero: self.zero.clone(),
        };
        poly.normalize();
        Ok(poly)
    }

    fn negate(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| c.negate()).collect(),
            zero: self.zero.clone(),
        }
    }

    fn zero(&self) -> Self {
        Self::zero_over(&self.zero)
    }

    fn identity(&self) -> Self {
        Self::constant(self.zero.identity())
    }
}

impl<F: Field + Eq> Eq for Polynomial<F> {}

impl<F: Field + Hash> Hash for Polynomial<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl<F: Field> fmt::Debug for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_terms(f, |c, f| write!(f, "{:?}", c))
    }
}

impl<F: Field + fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_terms(f, |c, f| write!(f, "{}", c))
    }
}
