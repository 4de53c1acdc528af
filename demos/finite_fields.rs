//! Finite Fields
//!
//! This example demonstrates:
//! - Prime fields GF(p) with a modulus chosen at runtime
//! - Building GF(p^n) from a size or from an explicit characteristic
//! - Arithmetic, inversion and the multiplicative group order
//! - Generic code written once against the `Field` trait
//!
//! Run with: cargo run --example finite_fields

use algebrix::structures::gf::is_irreducible;
use algebrix::{Field, FiniteField, Polynomial, PrimeField, Rational, Ring};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> algebrix::Result<()> {
    println!("=== Finite Fields ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    prime_field_basics()?;
    extension_field(&mut rng)?;
    explicit_characteristic()?;
    generic_code(&mut rng)?;

    Ok(())
}

/// Arithmetic in GF(17)
fn prime_field_basics() -> algebrix::Result<()> {
    println!("--- Prime Field ---\n");

    let f17 = PrimeField::new(17)?;
    let a = f17.element(5);
    let b = f17.element(-8);

    println!("field = {}", f17);
    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", a.add(&b)?);
    println!("a * b = {}", a.multiply(&b)?);
    println!("a / b = {}", a.divide(&b)?);
    println!("a^16 = {} (Fermat's little theorem)", a.pow(16)?);

    match PrimeField::new(15) {
        Ok(_) => println!("15 accepted?"),
        Err(err) => println!("GF(15): {}", err),
    }
    println!();
    Ok(())
}

/// GF(3^4) with a random irreducible characteristic
fn extension_field(rng: &mut ChaCha8Rng) -> algebrix::Result<()> {
    println!("--- Extension Field ---\n");

    let gf81 = FiniteField::with_size(81, rng)?;
    println!("field = {:?}", gf81);
    println!("size = {}", gf81.size());

    let a = gf81.element(&[1, 0, 2, 1])?;
    let b = gf81.random_element(rng)?;
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a * b = {}", a.multiply(&b)?);

    let a_inv = a.invert()?;
    println!("a^(-1) = {}", a_inv);
    println!("a * a^(-1) = {}", a.multiply(&a_inv)?);
    println!("a^80 = {} (order of the multiplicative group)", a.pow(80)?);
    println!();
    Ok(())
}

/// GF(2^8) using the AES polynomial x^8 + x^4 + x^3 + x + 1
fn explicit_characteristic() -> algebrix::Result<()> {
    println!("--- Explicit Characteristic ---\n");

    let f2 = PrimeField::new(2)?;
    let aes = Polynomial::new(
        [1, 0, 0, 0, 1, 1, 0, 1, 1]
            .iter()
            .map(|&c| f2.element(c))
            .collect(),
    )?;
    println!("x^8 + x^4 + x^3 + x + 1 irreducible: {}", is_irreducible(&aes, &f2)?);

    let gf256 = FiniteField::with_characteristic(2, 8, aes)?;
    // 0x57 * 0x83 = 0xc1 in the AES field
    let a = gf256.element(&[0, 1, 0, 1, 0, 1, 1, 1])?;
    let b = gf256.element(&[1, 0, 0, 0, 0, 0, 1, 1])?;
    println!("{{57}} * {{83}} = {}", a.multiply(&b)?);

    let reducible = Polynomial::new(vec![f2.one(), f2.zero(), f2.one()])?;
    if let Err(err) = FiniteField::with_characteristic(2, 2, reducible) {
        println!("x^2 + 1 over GF(2): {}", err);
    }
    println!();
    Ok(())
}

/// The same function over three different fields
fn generic_code(rng: &mut ChaCha8Rng) -> algebrix::Result<()> {
    println!("--- Generic Code ---\n");

    fn harmonic<F: Field>(xs: &[F]) -> algebrix::Result<F> {
        let mut acc = xs[0].zero();
        for x in xs {
            acc = acc.add(&x.invert()?)?;
        }
        Ok(acc)
    }

    let rationals: Vec<Rational> = (1..=5).map(Rational::from).collect();
    println!("1 + 1/2 + ... + 1/5 over Q = {}", harmonic(&rationals)?);

    let f101 = PrimeField::new(101)?;
    let residues: Vec<_> = (1..=5).map(|i| f101.element(i)).collect();
    println!("same sum in GF(101) = {}", harmonic(&residues)?);

    let gf49 = FiniteField::new(7, 2, rng)?;
    let mut elements = Vec::new();
    while elements.len() < 5 {
        let e = gf49.random_element(rng)?;
        if !e.is_zero() {
            elements.push(e);
        }
    }
    println!("random sum in {} = {}", gf49, harmonic(&elements)?);
    println!();
    Ok(())
}
