//! Exact arithmetic over rings and fields.
//!
//! - [`BigInteger`] and [`Rational`]: unbounded integers and fractions
//! - [`number_theory`]: gcd, modular inverse and exponentiation, exact and
//!   probabilistic primality tests, next-prime search
//! - [`Polynomial`]: polynomials over any [`Field`], with Euclidean division
//!   and (extended) gcd
//! - [`PrimeField`] and [`FiniteField`]: GF(p) and GF(p^n) with moduli chosen
//!   at runtime
//!
//! Every element type implements the [`Ring`] contract, so generic code can
//! be written once:
//!
//! ```
//! use algebrix::{Field, FiniteField, PrimeField, Rational, Ring};
//! use rand::SeedableRng;
//!
//! fn sum_of_inverses<F: Field>(xs: &[F]) -> algebrix::Result<F> {
//!     let mut acc = xs[0].zero();
//!     for x in xs {
//!         acc = acc.add(&x.invert()?)?;
//!     }
//!     Ok(acc)
//! }
//!
//! let f7 = PrimeField::new(7).unwrap();
//! let xs = [f7.element(1), f7.element(2), f7.element(3)];
//! assert_eq!(sum_of_inverses(&xs).unwrap(), f7.element(4)); // 1 + 4 + 5
//!
//! let qs = [Rational::from(2), Rational::from(3)];
//! assert_eq!(sum_of_inverses(&qs).unwrap(), Rational::new(5, 6).unwrap());
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let gf8 = FiniteField::with_size(8, &mut rng).unwrap();
//! let e = gf8.element(&[1, 0, 1]).unwrap();
//! assert!(e.pow(7).unwrap().is_identity());
//! ```

pub mod algebra;
pub mod config;
pub mod error;
pub mod number_theory;
pub mod structures;
pub mod utils;

pub use algebra::field::{Field, OrderedField};
pub use algebra::ring::{OrderedRing, Ring};

pub use config::PrimalityConfig;
pub use error::{Error, Result};

pub use structures::bigint::BigInteger;
pub use structures::fp::{PrimeField, PrimeFieldElement};
pub use structures::gf::{FiniteField, FiniteFieldElement};
pub use structures::poly::Polynomial;
pub use structures::rational::Rational;
