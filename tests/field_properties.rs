use proptest::prelude::*;

use algebrix::number_theory::modular::{extended_gcd, gcd, mod_inverse, power_modulus};
use algebrix::{BigInteger, Error, Field, PrimeField, PrimeFieldElement, Ring};

fn f17() -> PrimeField {
    PrimeField::new(17).unwrap()
}

fn arb_f17() -> impl Strategy<Value = PrimeFieldElement> {
    (0i64..17).prop_map(|v| f17().element(v))
}

fn arb_f17_nonzero() -> impl Strategy<Value = PrimeFieldElement> {
    (1i64..17).prop_map(|v| f17().element(v))
}

fn arb_big() -> impl Strategy<Value = BigInteger> {
    any::<i128>().prop_map(BigInteger::from)
}

// ===== Addition properties =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_f17(), b in arb_f17()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_f17(), b in arb_f17(), c in arb_f17()) {
        prop_assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn additive_identity(a in arb_f17()) {
        prop_assert_eq!(a.add(&a.zero()).unwrap(), a.clone());
        prop_assert_eq!(a.zero().add(&a).unwrap(), a);
    }
}

proptest! {
    #[test]
    fn additive_inverse(a in arb_f17()) {
        prop_assert!(a.add(&a.negate()).unwrap().is_zero());
        prop_assert_eq!(a.negate().negate(), a);
    }
}

proptest! {
    #[test]
    fn subtraction_definition(a in arb_f17(), b in arb_f17()) {
        prop_assert_eq!(a.subtract(&b).unwrap(), a.add(&b.negate()).unwrap());
        prop_assert!(a.subtract(&a).unwrap().is_zero());
    }
}

// ===== Multiplication properties =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_f17(), b in arb_f17()) {
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }
}

proptest! {
    #[test]
    fn multiplication_associative(a in arb_f17(), b in arb_f17(), c in arb_f17()) {
        prop_assert_eq!(
            a.multiply(&b).unwrap().multiply(&c).unwrap(),
            a.multiply(&b.multiply(&c).unwrap()).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn multiplicative_identity_and_zero(a in arb_f17()) {
        prop_assert_eq!(a.multiply(&a.identity()).unwrap(), a.clone());
        prop_assert!(a.multiply(&a.zero()).unwrap().is_zero());
    }
}

// ===== Distributivity =====

proptest! {
    #[test]
    fn distributive(a in arb_f17(), b in arb_f17(), c in arb_f17()) {
        prop_assert_eq!(
            a.multiply(&b.add(&c).unwrap()).unwrap(),
            a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap()
        );
    }
}

// ===== Field properties (inverse) =====

proptest! {
    #[test]
    fn multiplicative_inverse(a in arb_f17_nonzero()) {
        let inv = a.invert().unwrap();
        prop_assert!(a.multiply(&inv).unwrap().is_identity());
        prop_assert_eq!(inv.invert().unwrap(), a);
    }
}

proptest! {
    #[test]
    fn division_consistency(a in arb_f17(), b in arb_f17_nonzero()) {
        prop_assert_eq!(a.divide(&b).unwrap().multiply(&b).unwrap(), a);
    }
}

proptest! {
    #[test]
    fn scale_and_pow_match_naive(a in arb_f17(), k in 0u64..64) {
        let mut sum = a.zero();
        let mut product = a.identity();
        for _ in 0..k {
            sum = sum.add(&a).unwrap();
            product = product.multiply(&a).unwrap();
        }
        prop_assert_eq!(a.scale(k).unwrap(), sum);
        prop_assert_eq!(a.pow(k).unwrap(), product);
    }
}

#[test]
fn zero_has_no_inverse() {
    assert_eq!(f17().zero().invert(), Err(Error::DivisionByZero));
}

// ===== Value representation =====

proptest! {
    #[test]
    fn element_reduces_mod_p(v in -1000i64..1000) {
        let a = f17().element(v);
        prop_assert_eq!(a.value(), &BigInteger::from(v.rem_euclid(17)));
    }
}

// ===== Integer number theory =====

proptest! {
    #[test]
    fn gcd_divides_both(a in arb_big(), b in arb_big()) {
        let g = gcd(&a, &b);
        prop_assume!(!g.is_zero());
        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
    }
}

proptest! {
    #[test]
    fn bezout_identity(a in arb_big(), b in arb_big()) {
        let (g, s, t) = extended_gcd(&a, &b);
        prop_assert_eq!(&g, &gcd(&a, &b));
        prop_assert_eq!(&s * &a + &t * &b, g);
    }
}

proptest! {
    #[test]
    fn mod_inverse_when_coprime(x in arb_big(), m in 2i64..1_000_000) {
        let m = BigInteger::from(m);
        match mod_inverse(&x, &m) {
            Ok(inv) => {
                prop_assert!(gcd(&x, &m).is_one());
                prop_assert!((&x * &inv).modulo(&m).unwrap().is_one());
            }
            Err(err) => {
                prop_assert!(matches!(err, Error::NoInverse { .. }), "expected Error::NoInverse, got {:?}", err);
                prop_assert!(!gcd(&x, &m).is_one());
            }
        }
    }
}

proptest! {
    #[test]
    fn power_modulus_matches_naive(x in -1000i64..1000, e in 0u32..40, m in 1i64..10_000) {
        let (x, m) = (BigInteger::from(x), BigInteger::from(m));
        let mut expected = BigInteger::from(1).modulo(&m).unwrap();
        for _ in 0..e {
            expected = (&expected * &x).modulo(&m).unwrap();
        }
        prop_assert_eq!(power_modulus(&x, &BigInteger::from(e), &m).unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn truncate_and_modulo_reconstruct(a in arb_big(), b in arb_big()) {
        prop_assume!(b.is_positive());
        let q = a.truncate(&b).unwrap();
        let r = &a - &q * &b;
        prop_assert!(r.abs() < b.abs());
        let m = a.modulo(&b).unwrap();
        prop_assert!(!m.is_negative() && m < b);
        prop_assert!((&a - &m) % &b == BigInteger::from(0));
    }
}

proptest! {
    #[test]
    fn radix_round_trip(a in arb_big(), radix in 2u32..=64) {
        let s = a.to_string_radix(radix).unwrap();
        prop_assert_eq!(BigInteger::from_str_radix(&s, radix).unwrap(), a);
    }
}

proptest! {
    #[test]
    fn bytes_round_trip(a in arb_big()) {
        prop_assert_eq!(BigInteger::from_bytes_be(&a.to_bytes_be()).unwrap(), a);
    }
}

proptest! {
    #[test]
    fn sqrt_is_floor(a in any::<u128>()) {
        let n = BigInteger::from(a);
        let r = n.sqrt().unwrap();
        prop_assert!(&r * &r <= n);
        let r1 = r.inc();
        prop_assert!(&r1 * &r1 > n);
    }
}

// ===== Tests with a larger prime =====

mod larger_prime {
    use super::*;

    fn f101() -> PrimeField {
        PrimeField::new(101).unwrap()
    }

    fn arb_f101() -> impl Strategy<Value = PrimeFieldElement> {
        (0i64..101).prop_map(|v| f101().element(v))
    }

    fn arb_f101_nonzero() -> impl Strategy<Value = PrimeFieldElement> {
        (1i64..101).prop_map(|v| f101().element(v))
    }

    proptest! {
        #[test]
        fn distributive(a in arb_f101(), b in arb_f101(), c in arb_f101()) {
            prop_assert_eq!(
                a.multiply(&b.add(&c).unwrap()).unwrap(),
                a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap()
            );
        }
    }

    proptest! {
        #[test]
        fn fermat_little_theorem(a in arb_f101_nonzero()) {
            prop_assert!(a.pow(100).unwrap().is_identity());
        }
    }

    proptest! {
        #[test]
        fn division_consistency(a in arb_f101(), b in arb_f101_nonzero()) {
            prop_assert_eq!(a.divide(&b).unwrap().multiply(&b).unwrap(), a);
        }
    }
}
