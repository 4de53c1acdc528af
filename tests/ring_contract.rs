//! Every element type must satisfy the same ring laws.
//!
//! The checks are written once against the `Ring`/`Field` traits and run over
//! a fixed sample of each structure.

use algebrix::{
    BigInteger, Error, Field, FiniteField, Polynomial, PrimeField, Rational, Ring,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn check_ring_laws<R: Ring>(samples: &[R]) {
    for a in samples {
        let zero = a.zero();
        let one = a.identity();

        assert_eq!(a.add(&zero).unwrap(), *a, "{:?} + 0", a);
        assert_eq!(a.multiply(&one).unwrap(), *a, "{:?} * 1", a);
        assert!(a.add(&a.negate()).unwrap().is_zero(), "{:?} - {:?}", a, a);
        assert!(a.multiply(&zero).unwrap().is_zero(), "{:?} * 0", a);
        assert_eq!(a.square().unwrap(), a.multiply(a).unwrap());
        assert_eq!(a.scale(3).unwrap(), a.add(a).unwrap().add(a).unwrap());
        assert_eq!(a.pow(0).unwrap(), one);
        assert_eq!(
            a.pow(3).unwrap(),
            a.multiply(a).unwrap().multiply(a).unwrap()
        );

        for b in samples {
            assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
            assert_eq!(a.multiply(b).unwrap(), b.multiply(a).unwrap());
            assert_eq!(a.subtract(b).unwrap(), a.add(&b.negate()).unwrap());

            for c in samples {
                assert_eq!(
                    a.add(b).unwrap().add(c).unwrap(),
                    a.add(&b.add(c).unwrap()).unwrap()
                );
                assert_eq!(
                    a.multiply(b).unwrap().multiply(c).unwrap(),
                    a.multiply(&b.multiply(c).unwrap()).unwrap()
                );
                assert_eq!(
                    a.multiply(&b.add(c).unwrap()).unwrap(),
                    a.multiply(b).unwrap().add(&a.multiply(c).unwrap()).unwrap()
                );
            }
        }
    }
}

fn check_field_laws<F: Field>(samples: &[F]) {
    check_ring_laws(samples);
    for a in samples {
        if a.is_zero() {
            assert_eq!(a.invert(), Err(Error::DivisionByZero));
            continue;
        }
        let inv = a.invert().unwrap();
        assert!(a.multiply(&inv).unwrap().is_identity(), "{:?}^-1", a);
        for b in samples {
            assert_eq!(b.divide(a).unwrap().multiply(a).unwrap(), *b);
        }
    }
}

#[test]
fn big_integers() {
    let samples: Vec<BigInteger> = [0i64, 1, -1, 7, -12, 1 << 40]
        .iter()
        .map(|&v| BigInteger::from(v))
        .chain(["123456789012345678901234567890".parse().unwrap()])
        .collect();
    check_ring_laws(&samples);
}

#[test]
fn rationals() {
    let samples = [
        Rational::from(0),
        Rational::from(1),
        Rational::new(-3, 4).unwrap(),
        Rational::new(22, 7).unwrap(),
        Rational::new(5, -9).unwrap(),
    ];
    check_field_laws(&samples);
}

#[test]
fn prime_field_elements() {
    let f = PrimeField::new(31).unwrap();
    let samples: Vec<_> = [0, 1, 2, 15, 30, -4].iter().map(|&v| f.element(v)).collect();
    check_field_laws(&samples);
}

#[test]
fn binary_field_elements() {
    let f = PrimeField::new(2).unwrap();
    check_field_laws(&[f.zero(), f.one()]);
}

#[test]
fn finite_field_elements() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let gf = FiniteField::new(5, 3, &mut rng).unwrap();
    let mut samples = vec![gf.zero(), gf.one(), gf.element(&[1, 0, 0]).unwrap()];
    for _ in 0..4 {
        samples.push(gf.random_element(&mut rng).unwrap());
    }
    check_field_laws(&samples);
}

#[test]
fn polynomials() {
    let f = PrimeField::new(7).unwrap();
    let poly = |coeffs: &[i64]| {
        Polynomial::new(coeffs.iter().map(|&c| f.element(c)).collect()).unwrap()
    };
    let samples = [
        poly(&[0]),
        poly(&[1]),
        poly(&[1, 0]),
        poly(&[3, 0, 6]),
        poly(&[2, 5, 1, 4]),
    ];
    check_ring_laws(&samples);
}

#[test]
fn mixing_structures_is_a_type_mismatch() {
    let f7 = PrimeField::new(7).unwrap();
    let f11 = PrimeField::new(11).unwrap();
    let a = f7.element(3);
    let b = f11.element(3);
    assert!(matches!(a.add(&b), Err(Error::TypeMismatch { .. })));
    assert!(matches!(a.multiply(&b), Err(Error::TypeMismatch { .. })));

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let gf9 = FiniteField::new(3, 2, &mut rng).unwrap();
    let gf27 = FiniteField::new(3, 3, &mut rng).unwrap();
    let x = gf9.one();
    let y = gf27.one();
    assert!(matches!(x.add(&y), Err(Error::TypeMismatch { .. })));
    assert!(matches!(x.multiply(&y), Err(Error::TypeMismatch { .. })));
}
