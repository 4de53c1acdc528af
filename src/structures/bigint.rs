use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;

use num_bigint::{BigInt, RandBigInt, Sign};
use num_integer::{Integer, Roots};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::algebra::ring::{OrderedRing, Ring};
use crate::error::{Error, Result};

/// Digit alphabet for radix 2..=64: `0-9`, `A-Z`, `a-z`, `+`, `/`.
const DIGITS: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Signed integer of unbounded size.
///
/// Arithmetic is exact: there is no overflow, only allocation. The standard
/// operators are implemented for owned and borrowed operands; `/` and `%`
/// truncate toward zero and panic on a zero divisor like the primitive
/// integers do. Use [`BigInteger::truncate`] and [`BigInteger::modulo`] for
/// checked division.
///
/// # Example
///
/// ```
/// use algebrix::BigInteger;
///
/// let a = BigInteger::from(1u64 << 40);
/// let b = &a * &a;
/// assert_eq!(b.to_string(), "1208925819614629174706176");
/// assert_eq!(b.to_string_radix(16).unwrap(), "10000000000000000000");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BigInteger {
    value: BigInt,
}

impl BigInteger {
    /// Borrow the underlying `num_bigint::BigInt`.
    pub fn as_bigint(&self) -> &BigInt {
        &self.value
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if this is one.
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Check if this is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    /// Check if this is divisible by two.
    pub fn is_even(&self) -> bool {
        self.value.is_even()
    }

    /// Sign of the value as `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.value.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
        }
    }

    /// `self + 1`.
    pub fn inc(&self) -> Self {
        Self {
            value: &self.value + 1u32,
        }
    }

    /// `self - 1`.
    pub fn dec(&self) -> Self {
        Self {
            value: &self.value - 1u32,
        }
    }

    /// Quotient rounded toward zero.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn truncate(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self {
            value: &self.value / &divisor.value,
        })
    }

    /// Remainder in `[0, m)` for a positive modulus `m`.
    ///
    /// Negative values wrap around: `(-7).modulo(3) == 2`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for `m == 0` and `InvalidArgument` for a
    /// negative modulus.
    pub fn modulo(&self, m: &Self) -> Result<Self> {
        if m.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if m.is_negative() {
            return Err(Error::invalid_argument(format!(
                "modulus must be positive, got {}",
                m
            )));
        }
        Ok(Self {
            value: self.value.mod_floor(&m.value),
        })
    }

    /// [`BigInteger::modulo`] for a modulus the caller knows is positive.
    pub(crate) fn reduce(&self, m: &Self) -> Self {
        Self {
            value: self.value.mod_floor(&m.value),
        }
    }

    /// Number of bits in the magnitude; zero has bit length 0.
    pub fn bit_length(&self) -> u64 {
        self.value.bits()
    }

    /// Binary digits of the magnitude, most significant first.
    ///
    /// Zero yields a single `false`.
    pub fn binary_digits(&self) -> Vec<bool> {
        self.value
            .magnitude()
            .to_radix_be(2)
            .into_iter()
            .map(|d| d == 1)
            .collect()
    }

    /// Binary string of the value, with a leading `-` when negative.
    pub fn to_binary_string(&self) -> String {
        self.value.to_str_radix(2)
    }

    /// Floor of the square root, by Newton's (Heron's) iteration.
    ///
    /// The iteration starts above the root and decreases monotonically, so
    /// it stops at the first step that fails to shrink the estimate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for negative values.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(99).sqrt().unwrap(), BigInteger::from(9));
    /// assert_eq!(BigInteger::from(100).sqrt().unwrap(), BigInteger::from(10));
    /// ```
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(Error::invalid_argument(format!(
                "square root of negative value {}",
                self
            )));
        }
        if self.value < BigInt::from(2) {
            return Ok(self.clone());
        }

        let start = (self.value.bits() + 1) / 2;
        let mut x = BigInt::one() << (start as usize);
        loop {
            let y: BigInt = (&x + &self.value / &x) >> 1usize;
            if y >= x {
                return Ok(Self { value: x });
            }
            x = y;
        }
    }

    /// Floor of the `k`-th root.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for `k == 0` or an even root of a negative
    /// value.
    pub fn nth_root(&self, k: u32) -> Result<Self> {
        if k == 0 {
            return Err(Error::invalid_argument("zeroth root is undefined"));
        }
        if self.is_negative() && k % 2 == 0 {
            return Err(Error::invalid_argument(format!(
                "even root of negative value {}",
                self
            )));
        }
        Ok(Self {
            value: self.value.nth_root(k),
        })
    }

    /// Uniform random value in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `max` is positive.
    pub fn random_below<R: rand::Rng + ?Sized>(max: &Self, rng: &mut R) -> Result<Self> {
        if !max.is_positive() {
            return Err(Error::invalid_argument(format!(
                "random bound must be positive, got {}",
                max
            )));
        }
        Ok(Self {
            value: rng.gen_bigint_range(&BigInt::zero(), &max.value),
        })
    }

    /// Uniform random value in the inclusive range `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `low > high`.
    pub fn random_between<R: rand::Rng + ?Sized>(
        low: &Self,
        high: &Self,
        rng: &mut R,
    ) -> Result<Self> {
        if low > high {
            return Err(Error::invalid_argument(format!(
                "empty range [{}, {}]",
                low, high
            )));
        }
        let span = (high - low).inc();
        Ok(Self::random_below(&span, rng)? + low)
    }

    /// Convert to `u64` if the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Convert to `i64` if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }

    /// Signed two's-complement encoding, big-endian, minimal length.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(255).to_bytes_be(), vec![0x00, 0xff]);
    /// assert_eq!(BigInteger::from(-1).to_bytes_be(), vec![0xff]);
    /// ```
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.value.to_signed_bytes_be()
    }

    /// Decode a signed two's-complement big-endian byte string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slice.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::invalid_argument("empty byte encoding"));
        }
        Ok(Self {
            value: BigInt::from_signed_bytes_be(bytes),
        })
    }

    /// Render in any radix from 2 to 64.
    ///
    /// Digits are produced least significant first by repeated reduction
    /// modulo the radix and then reversed. Positions 0-61 use `0-9A-Za-z`,
    /// 62 is `+` and 63 is `/`. Zero renders as `"0"`; negative values get a
    /// leading `-`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the radix is outside `2..=64`.
    ///
    /// # Example
    ///
    /// ```
    /// use algebrix::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(255).to_string_radix(16).unwrap(), "FF");
    /// assert_eq!(BigInteger::from(63).to_string_radix(64).unwrap(), "/");
    /// assert_eq!(BigInteger::from(-5).to_string_radix(2).unwrap(), "-101");
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let base = BigInt::from(radix);
        let mut rest = self.value.abs();
        let mut digits = Vec::new();
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_rem(&base);
            // digit < radix <= 64
            let index = digit.to_usize().unwrap_or_default();
            digits.push(DIGITS[index]);
            rest = quotient;
        }
        if self.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();

        Ok(digits.into_iter().map(char::from).collect())
    }

    /// Parse a string produced by [`BigInteger::to_string_radix`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a radix outside `2..=64`, an empty
    /// string, or a character that is not a digit of the radix.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        check_radix(radix)?;

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(Error::invalid_argument(format!(
                "no digits in {:?}",
                s
            )));
        }

        let base = BigInt::from(radix);
        let mut value = BigInt::zero();
        for c in digits.bytes() {
            let digit = DIGITS
                .iter()
                .position(|&d| d == c)
                .filter(|&d| d < radix as usize)
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "{:?} is not a radix-{} digit",
                        char::from(c),
                        radix
                    ))
                })?;
            value = value * &base + BigInt::from(digit);
        }
        if negative {
            value = -value;
        }

        Ok(Self { value })
    }
}

fn check_radix(radix: u32) -> Result<()> {
    if (2..=64).contains(&radix) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "radix {} is out of range, must be between 2 and 64",
            radix
        )))
    }
}

/* ---- Conversions ---- */

impl From<BigInt> for BigInteger {
    fn from(value: BigInt) -> Self {
        Self { value }
    }
}

impl From<BigInteger> for BigInt {
    fn from(value: BigInteger) -> Self {
        value.value
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self { value: BigInt::from(value) }
                }
            }
        )*
    };
}

from_primitive!(i32, i64, i128, u32, u64, u128, usize);

impl From<&BigInteger> for BigInteger {
    fn from(value: &BigInteger) -> Self {
        value.clone()
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    /// Parse a decimal string.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/* ---- Arithmetic operators ---- */

macro_rules! forward_binop {
    ($tr:ident, $method:ident) => {
        impl $tr<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger {
                    value: $tr::$method(&self.value, &rhs.value),
                }
            }
        }

        impl $tr<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger {
                    value: $tr::$method(self.value, rhs.value),
                }
            }
        }

        impl $tr<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger {
                    value: $tr::$method(self.value, &rhs.value),
                }
            }
        }

        impl $tr<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger {
                    value: $tr::$method(&self.value, rhs.value),
                }
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger { value: -self.value }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger {
            value: -&self.value,
        }
    }
}

/* ---- implement Ring ---- */

impl Ring for BigInteger {
    #[inline]
    fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn negate(&self) -> Self {
        -self
    }

    fn zero(&self) -> Self {
        Self {
            value: BigInt::zero(),
        }
    }

    fn identity(&self) -> Self {
        Self {
            value: BigInt::one(),
        }
    }
}

impl OrderedRing for BigInteger {}

/* ---- serde ---- */

#[cfg(feature = "serde")]
impl serde::Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
