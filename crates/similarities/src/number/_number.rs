//! A `Number` is a general numeric type.
//!
//! We calculate distances and similarity coefficients over collections of
//! `Number`s. Distance and coefficient values are also represented as
//! `Number`s.

use core::fmt::{Debug, Display};

use super::{Addition, Multiplication};

/// Distances and similarity coefficients are represented as `Number`s.
pub trait Number:
    Addition + Multiplication + PartialEq + Clone + Send + Sync + Debug + Display + Default
{
    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f32`. This may be a lossy conversion.
    fn as_f32(self) -> f32;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns the number as a `u64`. This may be a lossy conversion.
    fn as_u64(self) -> u64;
}

impl Number for f32 {
    fn from<T: Number>(n: T) -> Self {
        n.as_f32()
    }

    fn as_f32(self) -> f32 {
        self
    }

    #[allow(clippy::cast_lossless)]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_u64(self) -> u64 {
        self as u64
    }
}

impl Number for f64 {
    fn from<T: Number>(n: T) -> Self {
        n.as_f64()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_f32(self) -> f32 {
        self as f32
    }

    fn as_f64(self) -> f64 {
        self
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_u64(self) -> u64 {
        self as u64
    }
}

/// A macro to implement the `Number` trait for the primitive unsigned
/// integer types.
macro_rules! impl_number_uint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless, clippy::cast_precision_loss)]
            impl Number for $ty {
                fn from<T: Number>(n: T) -> Self {
                    n.as_u64() as $ty
                }

                fn as_f32(self) -> f32 {
                    self as f32
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    }
}

impl_number_uint!(u8, u16, u32, u64, u128, usize);
