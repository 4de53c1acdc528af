//! Modular arithmetic on arbitrary-precision integers.

use crate::error::{Error, Result};
use crate::structures::bigint::BigInteger;
use crate::utils;

/// Greatest common divisor of `|x|` and `|y|`.
///
/// `gcd(x, 0) == |x|` and `gcd(0, 0) == 0`.
pub fn gcd(x: &BigInteger, y: &BigInteger) -> BigInteger {
    let mut a = x.abs();
    let mut b = y.abs();
    if let (Some(u), Some(v)) = (a.to_u64(), b.to_u64()) {
        return BigInteger::from(utils::gcd(u, v));
    }
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `s*x + t*y == g` and `g == gcd(x, y) >= 0`.
///
/// The quotients of the Euclidean reduction are pushed onto a stack and then
/// unwound with `(s, t) <- (t, s - q*t)`, starting from `(1, 0)` at the
/// remainder where `y` reaches zero.
///
/// # Example
///
/// ```
/// use algebrix::BigInteger;
/// use algebrix::number_theory::modular::extended_gcd;
///
/// let (x, y) = (BigInteger::from(240), BigInteger::from(46));
/// let (g, s, t) = extended_gcd(&x, &y);
/// assert_eq!(g, BigInteger::from(2));
/// assert_eq!(&s * &x + &t * &y, g);
/// ```
pub fn extended_gcd(x: &BigInteger, y: &BigInteger) -> (BigInteger, BigInteger, BigInteger) {
    let mut a = x.clone();
    let mut b = y.clone();
    let mut quotients = Vec::new();
    while !b.is_zero() {
        let q = &a / &b;
        let r = &a - &q * &b;
        quotients.push(q);
        a = b;
        b = r;
    }

    let mut s = BigInteger::from(1);
    let mut t = BigInteger::from(0);
    while let Some(q) = quotients.pop() {
        let next_t = &s - &q * &t;
        s = t;
        t = next_t;
    }

    if a.is_negative() {
        (-a, -s, -t)
    } else {
        (a, s, t)
    }
}

/// Multiplicative inverse of `x` modulo `m`, in `[0, m)`.
///
/// # Errors
///
/// - `InvalidArgument` if `m <= 0`
/// - `NoInverse` if `gcd(x, m) != 1`
pub fn mod_inverse(x: &BigInteger, m: &BigInteger) -> Result<BigInteger> {
    check_modulus(m)?;
    let reduced = x.modulo(m)?;
    if let (Some(r), Some(word)) = (reduced.to_u64(), m.to_u64()) {
        return utils::mod_inverse(r, word)
            .map(BigInteger::from)
            .ok_or_else(|| Error::no_inverse(x, m));
    }
    let (g, s, _) = extended_gcd(&reduced, m);
    if !g.is_one() {
        return Err(Error::no_inverse(x, m));
    }
    s.modulo(m)
}

/// `x^p mod m` by binary exponentiation.
///
/// The exponent's binary digits are consumed after the leading one: square
/// at every digit, multiply by the base when the digit is set, reduce modulo
/// `m` after each step. A negative exponent raises the inverse of `x`.
/// Operands that fit in a `u64` take the word-sized [`utils::pow_mod`].
///
/// # Errors
///
/// - `InvalidArgument` if `m <= 0`
/// - `NoInverse` if `p < 0` and `x` is not invertible modulo `m`
///
/// # Example
///
/// ```
/// use algebrix::BigInteger;
/// use algebrix::number_theory::modular::power_modulus;
///
/// let r = power_modulus(
///     &BigInteger::from(2),
///     &BigInteger::from(10),
///     &BigInteger::from(1000),
/// )
/// .unwrap();
/// assert_eq!(r, BigInteger::from(24));
/// ```
pub fn power_modulus(x: &BigInteger, p: &BigInteger, m: &BigInteger) -> Result<BigInteger> {
    check_modulus(m)?;
    if p.is_zero() {
        return BigInteger::from(1).modulo(m);
    }

    let base = if p.is_negative() {
        mod_inverse(x, m)?
    } else {
        x.modulo(m)?
    };
    if let (Some(b), Some(e), Some(word)) = (base.to_u64(), p.abs().to_u64(), m.to_u64()) {
        return Ok(BigInteger::from(utils::pow_mod(b, e, word)));
    }
    binary_power(&base, p, m)
}

/// Square-and-multiply over the binary digits of `|p|`; `base` is reduced.
fn binary_power(base: &BigInteger, p: &BigInteger, m: &BigInteger) -> Result<BigInteger> {
    let digits = p.binary_digits();
    let mut acc = base.clone();
    for &bit in &digits[1..] {
        acc = (&acc * &acc).modulo(m)?;
        if bit {
            acc = (&acc * base).modulo(m)?;
        }
    }
    Ok(acc)
}

fn check_modulus(m: &BigInteger) -> Result<()> {
    if m.is_positive() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "modulus must be positive, got {}",
            m
        )))
    }
}
