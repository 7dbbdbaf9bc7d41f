//! The `Number` trait is used to represent numbers of different types.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
//! * All primitive floating point numbers: `f32`, `f64`.

mod _number;
mod _variants;
mod arithmetic;

pub use _number::Number;
pub use _variants::{Float, UInt};
pub use arithmetic::{Addition, Multiplication};
