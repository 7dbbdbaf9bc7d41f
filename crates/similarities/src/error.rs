//! Errors reported for invalid pairs of inputs.

use thiserror::Error;

/// The error type for functions that are only defined for some pairs of
/// strings.
///
/// # Examples
///
/// ```
/// use similarities::{strings::hamming, Error};
///
/// let error = hamming::<u32>("suspicious", "delicious").unwrap_err();
///
/// assert_eq!(error, Error::UnequalLengths { left: 10, right: 9 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two strings have different numbers of characters.
    ///
    /// The counts are in characters, not bytes.
    #[error("unequal string lengths: {left} vs {right} characters")]
    UnequalLengths {
        /// Number of characters in the first string.
        left: usize,
        /// Number of characters in the second string.
        right: usize,
    },
}
