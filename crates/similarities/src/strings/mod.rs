//! Distance and similarity functions for strings.
//!
//! All lengths and positions are counted in characters, never bytes.

use crate::number::{Float, UInt};
use crate::{sets, Error};

/// Computes the Hamming distance between two strings.
///
/// The Hamming distance is defined as the number of positions at which
/// the corresponding characters are different. It is named after
/// Richard Hamming, who introduced it in his fundamental paper on
/// Hamming codes.
///
/// It is only defined for strings with the same number of characters.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
///
/// # Errors
///
/// * `Error::UnequalLengths` if the two strings have different numbers of
///   characters.
///
/// # Examples
///
/// ```
/// use similarities::strings::hamming;
///
/// let x = "naphthalising";
/// let y = "objectivising";
///
/// let distance: u16 = hamming(x, y)?;
///
/// assert_eq!(distance, 8);
/// # Ok::<(), similarities::Error>(())
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
/// * [Hamming's paper](https://doi.org/10.1002/j.1538-7305.1950.tb00463.x)
pub fn hamming<U: UInt>(x: &str, y: &str) -> Result<U, Error> {
    let (left, right) = (x.chars().count(), y.chars().count());
    if left == right {
        Ok(U::from(x.chars().zip(y.chars()).filter(|(a, b)| a != b).count()))
    } else {
        Err(Error::UnequalLengths { left, right })
    }
}

/// Computes the Jaccard similarity coefficient between the sets of
/// characters used by two strings.
///
/// Each string is reduced to its set of distinct characters, and the
/// coefficient is the cardinality of the intersection of the two sets
/// divided by the cardinality of their union. It ranges over `[0, 1]`, with
/// `1` meaning the strings are built from exactly the same characters.
///
/// Characters are compared case-sensitively; see [`jaccard_ci`] for a
/// case-insensitive version. When both strings are empty, the coefficient
/// is `0`.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
///
/// # Examples
///
/// ```
/// use similarities::strings::jaccard;
///
/// let coefficient: f64 = jaccard("suspicious", "delicious");
///
/// assert!((coefficient - 5.0 / 9.0).abs() < f64::EPSILON);
/// ```
///
/// # References
///
/// * [Jaccard index](https://en.wikipedia.org/wiki/Jaccard_index)
#[must_use]
pub fn jaccard<F: Float>(x: &str, y: &str) -> F {
    let x = x.chars().collect::<Vec<_>>();
    let y = y.chars().collect::<Vec<_>>();
    sets::jaccard(&x, &y)
}

/// Computes the overlap coefficient between the sets of characters used by
/// two strings.
///
/// Each string is reduced to its set of distinct characters, and the
/// coefficient is the cardinality of the intersection of the two sets
/// divided by the cardinality of the smaller set. It ranges over `[0, 1]`,
/// with `1` meaning the characters of one string all appear in the other.
///
/// Characters are compared case-sensitively; see [`overlap_ci`] for a
/// case-insensitive version. When either string is empty, the coefficient
/// is `0`.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
///
/// # Examples
///
/// ```
/// use similarities::strings::overlap;
///
/// let coefficient: f64 = overlap("suspicious", "delicious");
///
/// assert!((coefficient - 5.0 / 6.0).abs() < f64::EPSILON);
/// ```
///
/// # References
///
/// * [Overlap coefficient](https://en.wikipedia.org/wiki/Overlap_coefficient)
#[must_use]
pub fn overlap<F: Float>(x: &str, y: &str) -> F {
    let x = x.chars().collect::<Vec<_>>();
    let y = y.chars().collect::<Vec<_>>();
    sets::overlap(&x, &y)
}

/// Computes the Jaccard similarity coefficient between two strings,
/// ignoring case.
///
/// Both strings are lowercased before their character sets are built, so
/// this is equivalent to calling [`jaccard`] on pre-lowercased inputs.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
///
/// # Examples
///
/// ```
/// use similarities::strings::jaccard_ci;
///
/// let coefficient: f64 = jaccard_ci("Suspicious", "DELICIOUS");
///
/// assert!((coefficient - 5.0 / 9.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn jaccard_ci<F: Float>(x: &str, y: &str) -> F {
    jaccard(&x.to_lowercase(), &y.to_lowercase())
}

/// Computes the overlap coefficient between two strings, ignoring case.
///
/// Both strings are lowercased before their character sets are built, so
/// this is equivalent to calling [`overlap`] on pre-lowercased inputs.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
///
/// # Examples
///
/// ```
/// use similarities::strings::overlap_ci;
///
/// let coefficient: f64 = overlap_ci("SUSPICIOUS", "Delicious");
///
/// assert!((coefficient - 5.0 / 6.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn overlap_ci<F: Float>(x: &str, y: &str) -> F {
    overlap(&x.to_lowercase(), &y.to_lowercase())
}
