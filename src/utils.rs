//! Word-sized number theory helpers.
//!
//! These back the arbitrary-precision routines in [`crate::number_theory`]
//! whenever the operands are known to fit in a `u64`.

/// Check if `n` is a prime number.
///
/// Uses trial division up to [`isqrt`]`(n)`. Suitable for validating
/// moduli and scanning small ranges, not for large candidates.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = isqrt(n);
    (3..=limit).step_by(2).all(|i| n % i != 0)
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Floor of the square root of `n`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // f64 gets within one of the answer; fix up the rounding
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// `base^exp mod m` with 128-bit intermediates.
///
/// Returns 0 when `m == 1`. `m` must be non-zero.
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    debug_assert!(m != 0);
    if m == 1 {
        return 0;
    }
    let m = m as u128;
    let mut b = base as u128 % m;
    let mut acc: u128 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    acc as u64
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }
    let (mut old_r, mut r) = (i128::from(a % m), i128::from(m));
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return if m == 1 { Some(0) } else { None };
    }
    Some(old_s.rem_euclid(i128::from(m)) as u64)
}

/// Smallest prime strictly greater than `n`, or `None` past `u64::MAX`.
pub fn next_prime(n: u64) -> Option<u64> {
    if n < 2 {
        return Some(2);
    }
    let mut candidate = if n % 2 == 0 { n + 1 } else { n.checked_add(2)? };
    while !is_prime(candidate) {
        candidate = candidate.checked_add(2)?;
    }
    Some(candidate)
}
