//! Number variants for the unsigned integer and floating point types our
//! functions return.

use core::hash::Hash;

use crate::Number;

/// Sub-trait of `Number` for all unsigned integer types.
///
/// Distance counts, such as those from `strings::hamming`, are `UInt`s.
pub trait UInt: Number + Hash + Eq + Ord {}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UInt for $ty {}
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);

/// Sub-trait of `Number` for all floating point types.
///
/// Similarity coefficients, which need true division, are `Float`s.
pub trait Float: Number {}

impl Float for f32 {}

impl Float for f64 {}
