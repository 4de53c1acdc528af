//! Exact and probabilistic primality tests, and next-prime search.
//!
//! The probabilistic tests take their randomness as an explicit argument so
//! that results are reproducible under a seeded generator.

use log::{debug, trace};

use crate::config::PrimalityConfig;
use crate::error::Result;
use crate::number_theory::modular::power_modulus;
use crate::structures::bigint::BigInteger;
use crate::utils;

/// The first ten primes, used by [`is_basic_prime`].
pub const SMALL_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Exact primality by trial division with 2 and the odd numbers up to
/// `floor(sqrt(p))`.
///
/// Cost grows with the square root of `p`; prefer [`is_probable_prime`] for
/// anything beyond a few dozen bits.
pub fn is_prime(p: &BigInteger) -> bool {
    if let Some(v) = p.to_u64() {
        return utils::is_prime(v);
    }
    if p.is_negative() || p.is_even() {
        return false;
    }
    let Ok(limit) = p.sqrt() else {
        return false;
    };

    let two = BigInteger::from(2);
    let mut divisor = BigInteger::from(3);
    while divisor <= limit {
        if (p % &divisor).is_zero() {
            return false;
        }
        divisor = divisor + &two;
    }
    true
}

/// Cheap pre-filter: rejects anything divisible by one of [`SMALL_PRIMES`].
///
/// The small primes themselves pass. About 84% of all integers have a
/// prime factor below 30 and are eliminated here.
pub fn is_basic_prime(p: &BigInteger) -> bool {
    if *p < BigInteger::from(2) {
        return false;
    }
    for q in SMALL_PRIMES {
        let q = BigInteger::from(q);
        if *p == q {
            return true;
        }
        if (p % &q).is_zero() {
            return false;
        }
    }
    true
}

/// Fermat test with `rounds` witnesses drawn uniformly from `[1, p-1]`.
///
/// A witness `a` with `a^(p-1) mod p != 1` proves `p` composite. Carmichael
/// numbers satisfy the congruence for every coprime witness, so this test
/// alone can be fooled.
pub fn is_fermat_prime<R: rand::Rng + ?Sized>(
    p: &BigInteger,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let two = BigInteger::from(2);
    if *p < two {
        return Ok(false);
    }
    if *p == two {
        return Ok(true);
    }
    if p.is_even() {
        return Ok(false);
    }

    let one = BigInteger::from(1);
    let p_minus_1 = p.dec();
    for _ in 0..rounds {
        let a = BigInteger::random_between(&one, &p_minus_1, rng)?;
        if !power_modulus(&a, &p_minus_1, p)?.is_one() {
            trace!("fermat witness {} proves {} composite", a, p);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Miller-Rabin test with `rounds` witnesses drawn uniformly from `[2, p-2]`.
///
/// Writes `p - 1 = 2^r * d` with `d` odd. A witness `a` is passed when
/// `a^d` is 1 or `p - 1`, or when one of the next `r - 1` squarings reaches
/// `p - 1`. A composite survives a single witness with probability at most
/// 1/4, so the error after `rounds` witnesses is at most `4^-rounds`.
///
/// # Example
///
/// ```
/// use algebrix::BigInteger;
/// use algebrix::number_theory::primes::is_miller_rabin_prime;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
/// // 561 = 3 * 11 * 17 is a Carmichael number
/// assert!(!is_miller_rabin_prime(&BigInteger::from(561), 20, &mut rng).unwrap());
/// assert!(is_miller_rabin_prime(&BigInteger::from(1_000_003), 20, &mut rng).unwrap());
/// ```
pub fn is_miller_rabin_prime<R: rand::Rng + ?Sized>(
    p: &BigInteger,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let two = BigInteger::from(2);
    if *p < two {
        return Ok(false);
    }
    if *p <= BigInteger::from(3) {
        return Ok(true);
    }
    if p.is_even() {
        return Ok(false);
    }

    let p_minus_1 = p.dec();
    let mut d = p_minus_1.clone();
    let mut r = 0u64;
    while d.is_even() {
        d = &d / &two;
        r += 1;
    }

    let p_minus_2 = p_minus_1.dec();
    'witness: for _ in 0..rounds {
        let a = BigInteger::random_between(&two, &p_minus_2, rng)?;
        let mut x = power_modulus(&a, &d, p)?;
        if x.is_one() || x == p_minus_1 {
            continue;
        }
        for _ in 1..r {
            x = (&x * &x).modulo(p)?;
            if x == p_minus_1 {
                continue 'witness;
            }
            if x.is_one() {
                break;
            }
        }
        trace!("miller-rabin witness {} proves {} composite", a, p);
        return Ok(false);
    }
    Ok(true)
}

/// Decide primality using the cheapest sound method for the size of `p`.
///
/// Below `config.exact_search_limit` this is exact trial division. Above it,
/// `p` must pass [`is_basic_prime`], then [`is_fermat_prime`] and
/// [`is_miller_rabin_prime`] with the configured witness counts.
pub fn is_probable_prime<R: rand::Rng + ?Sized>(
    p: &BigInteger,
    config: &PrimalityConfig,
    rng: &mut R,
) -> Result<bool> {
    if let Some(v) = p.to_u64().filter(|&v| v < config.exact_search_limit) {
        return Ok(utils::is_prime(v));
    }
    if p.is_negative() || !is_basic_prime(p) {
        return Ok(false);
    }
    Ok(is_fermat_prime(p, config.fermat_rounds, rng)?
        && is_miller_rabin_prime(p, config.miller_rabin_rounds, rng)?)
}

/// Smallest (probable) prime strictly greater than `c`.
///
/// Values below `config.exact_search_limit` use the deterministic word-sized
/// search. Larger values step through odd candidates, filtering each through
/// the small-prime check, Fermat and Miller-Rabin. By the prime number
/// theorem about `ln(c) / 2` odd candidates are examined on average.
///
/// # Example
///
/// ```
/// use algebrix::{BigInteger, PrimalityConfig};
/// use algebrix::number_theory::primes::first_prime_larger_than;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
/// let config = PrimalityConfig::default();
/// let p = first_prime_larger_than(&BigInteger::from(100), &config, &mut rng).unwrap();
/// assert_eq!(p, BigInteger::from(101));
/// ```
pub fn first_prime_larger_than<R: rand::Rng + ?Sized>(
    c: &BigInteger,
    config: &PrimalityConfig,
    rng: &mut R,
) -> Result<BigInteger> {
    let two = BigInteger::from(2);
    if *c < two {
        return Ok(two);
    }
    if let Some(p) = c
        .to_u64()
        .filter(|&v| v < config.exact_search_limit)
        .and_then(utils::next_prime)
    {
        return Ok(BigInteger::from(p));
    }

    let mut candidate = c.inc();
    if candidate.is_even() {
        candidate = candidate.inc();
    }
    let mut trials = 1u64;
    loop {
        if is_basic_prime(&candidate)
            && is_fermat_prime(&candidate, config.fermat_rounds, rng)?
            && is_miller_rabin_prime(&candidate, config.miller_rabin_rounds, rng)?
        {
            debug!(
                "found prime {} after {} candidates (start {})",
                candidate, trials, c
            );
            return Ok(candidate);
        }
        trace!("rejected candidate {}", candidate);
        candidate = candidate + &two;
        trials += 1;
    }
}
