//! Primes and Modular Arithmetic
//!
//! This example demonstrates:
//! - gcd, Bezout coefficients and modular inverses on big integers
//! - Modular exponentiation
//! - Fermat vs Miller-Rabin on Carmichael numbers
//! - Searching for the next prime above a large bound
//!
//! Run with: cargo run --example primes

use algebrix::number_theory::modular::{extended_gcd, mod_inverse, power_modulus};
use algebrix::number_theory::primes::{
    first_prime_larger_than, is_fermat_prime, is_miller_rabin_prime, is_probable_prime,
};
use algebrix::{BigInteger, PrimalityConfig, PrimeField, Ring};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> algebrix::Result<()> {
    println!("=== Primes and Modular Arithmetic ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    modular_arithmetic()?;
    carmichael_numbers(&mut rng)?;
    next_primes(&mut rng)?;

    Ok(())
}

fn modular_arithmetic() -> algebrix::Result<()> {
    println!("--- Modular Arithmetic ---\n");

    let x = BigInteger::from(240);
    let y = BigInteger::from(46);
    let (g, s, t) = extended_gcd(&x, &y);
    println!("gcd({}, {}) = {} = {}*{} + {}*{}", x, y, g, s, x, t, y);

    let m = BigInteger::from(1_000_000_007);
    let inv = mod_inverse(&BigInteger::from(3), &m)?;
    println!("3^(-1) mod {} = {}", m, inv);

    let e: BigInteger = "123456789123456789".parse()?;
    println!("2^{} mod {} = {}", e, m, power_modulus(&BigInteger::from(2), &e, &m)?);
    println!(
        "2^(-1) mod {} = {}",
        m,
        power_modulus(&BigInteger::from(2), &BigInteger::from(-1), &m)?
    );

    if let Err(err) = mod_inverse(&BigInteger::from(4), &BigInteger::from(8)) {
        println!("4^(-1) mod 8: {}", err);
    }
    println!();
    Ok(())
}

fn carmichael_numbers(rng: &mut ChaCha8Rng) -> algebrix::Result<()> {
    println!("--- Carmichael Numbers ---\n");

    // Fermat witnesses that share a factor with n expose it, so the
    // Fermat test still catches these now and then
    for n in [561u64, 1105, 1729, 2465, 2821, 6601, 8911] {
        let n = BigInteger::from(n);
        let fermat = is_fermat_prime(&n, 3, rng)?;
        let miller_rabin = is_miller_rabin_prime(&n, 10, rng)?;
        println!(
            "{:>5}: fermat says {:<5}  miller-rabin says {}",
            n, fermat, miller_rabin
        );
    }
    println!();
    Ok(())
}

fn next_primes(rng: &mut ChaCha8Rng) -> algebrix::Result<()> {
    println!("--- Next Primes ---\n");

    let config = PrimalityConfig::default().with_miller_rabin_rounds(20);
    println!(
        "miller-rabin error bound with {} rounds: {:e}",
        config.miller_rabin_rounds,
        config.miller_rabin_error_bound()
    );

    let mut bound = BigInteger::from(1);
    for _ in 0..4 {
        bound = bound.multiply(&BigInteger::from(1_000_000_000))?;
        let p = first_prime_larger_than(&bound, &config, rng)?;
        println!("first prime after {} is {} (+{})", bound, p, &p - &bound);
    }

    let mersenne = BigInteger::from(2).pow(127)?.dec();
    println!(
        "2^127 - 1 is prime: {}",
        is_probable_prime(&mersenne, &config, rng)?
    );
    let field = PrimeField::new_probable(mersenne, &config, rng)?;
    println!("built {}", field);
    Ok(())
}
