//! Capability traits shared by every numeric type in the crate.

pub mod field;
pub mod ring;
