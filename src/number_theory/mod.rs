//! Integer number theory over [`BigInteger`](crate::BigInteger).

pub mod modular;
pub mod primes;
