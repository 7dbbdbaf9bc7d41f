//! Addition and Multiplication of `Number` types.

use core::{
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// The `Addition` trait provides the additive identity and operations for a
/// `Number` type.
pub trait Addition:
    Copy + PartialOrd + Add<Output = Self> + AddAssign<Self> + Sum<Self> + Sub<Self, Output = Self> + SubAssign<Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// Returns the absolute difference between `self` and `other`.
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        if self < other {
            other - self
        } else {
            self - other
        }
    }
}

/// Macro to implement `Addition` for all unsigned integer types.
macro_rules! impl_addition {
    ($($ty:ty),*) => {
        $(
            impl Addition for $ty {
                const ZERO: Self = 0;
            }
        )*
    }
}

impl_addition!(u8, u16, u32, u64, u128, usize);

impl Addition for f32 {
    const ZERO: Self = 0.0;
}

impl Addition for f64 {
    const ZERO: Self = 0.0;
}

/// The `Multiplication` trait provides the multiplicative identity and
/// operations for a `Number` type.
pub trait Multiplication:
    Addition + Mul<Output = Self> + MulAssign<Self> + Div<Self, Output = Self> + DivAssign<Self>
{
    /// The multiplicative identity.
    const ONE: Self;
}

/// Macro to implement `Multiplication` for all unsigned integer types.
macro_rules! impl_multiplication {
    ($($ty:ty),*) => {
        $(
            impl Multiplication for $ty {
                const ONE: Self = 1;
            }
        )*
    }
}

impl_multiplication!(u8, u16, u32, u64, u128, usize);

impl Multiplication for f32 {
    const ONE: Self = 1.0;
}

impl Multiplication for f64 {
    const ONE: Self = 1.0;
}
