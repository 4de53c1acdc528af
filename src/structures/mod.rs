pub mod bigint;
pub mod fp;
pub mod gf;
pub mod poly;
pub mod rational;
