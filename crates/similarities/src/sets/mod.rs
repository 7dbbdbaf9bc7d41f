//! Similarity coefficients for sets.

use std::collections::BTreeSet;

use crate::number::Float;

/// Jaccard similarity coefficient.
///
/// The Jaccard coefficient is a measure of how similar two sets are. It is
/// defined as the cardinality of the intersection of the sets divided by the
/// cardinality of the union of the sets. It ranges over `[0, 1]`, with `1`
/// meaning the sets are equal and `0` meaning they are disjoint.
///
/// When both sets are empty, the union is empty and the coefficient is `0`.
///
/// # Arguments
///
/// * `x`: A set represented as a slice of `Ord` items.
/// * `y`: A set represented as a slice of `Ord` items.
///
/// # Examples
///
/// ```
/// use similarities::sets::jaccard;
///
/// let x: Vec<u32> = vec![1, 2, 3];
/// let y: Vec<u32> = vec![2, 3, 4];
///
/// let coefficient: f32 = jaccard(&x, &y);
///
/// assert!((coefficient - 0.5).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn jaccard<T: Copy + Ord, F: Float>(x: &[T], y: &[T]) -> F {
    if x.is_empty() || y.is_empty() {
        return F::ZERO;
    }

    let x = x.iter().copied().collect::<BTreeSet<_>>();
    let y = y.iter().copied().collect::<BTreeSet<_>>();

    let intersection = x.intersection(&y).count();

    if intersection == x.len() && intersection == y.len() {
        F::ONE
    } else {
        let intersection = F::from(intersection);
        let union = F::from(x.union(&y).count());
        intersection / union
    }
}

/// Overlap coefficient, also known as the Szymkiewicz-Simpson coefficient.
///
/// The overlap coefficient is a measure of how much the smaller of two sets
/// is contained in the larger. It is defined as the cardinality of the
/// intersection of the sets divided by the cardinality of the smaller set.
/// It ranges over `[0, 1]`, with `1` meaning one of the sets is a subset of
/// the other.
///
/// When either set is empty, the coefficient is `0`.
///
/// # Arguments
///
/// * `x`: A set represented as a slice of `Ord` items.
/// * `y`: A set represented as a slice of `Ord` items.
///
/// # Examples
///
/// ```
/// use similarities::sets::overlap;
///
/// let x: Vec<u32> = vec![1, 2, 3, 4];
/// let y: Vec<u32> = vec![3, 4, 5];
///
/// let coefficient: f32 = overlap(&x, &y);
///
/// assert!((coefficient - 2.0 / 3.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn overlap<T: Copy + Ord, F: Float>(x: &[T], y: &[T]) -> F {
    if x.is_empty() || y.is_empty() {
        return F::ZERO;
    }

    let x = x.iter().copied().collect::<BTreeSet<_>>();
    let y = y.iter().copied().collect::<BTreeSet<_>>();

    let intersection = x.intersection(&y).count();

    if intersection == x.len() || intersection == y.len() {
        F::ONE
    } else {
        let intersection = F::from(intersection);
        let smaller = F::from(x.len().min(y.len()));
        intersection / smaller
    }
}

/// A named similarity coefficient over sets.
///
/// The free functions in this module are the preferred entry points. This
/// trait is for callers that choose a coefficient at run time.
pub trait Coefficient<T: Copy + Ord, F: Float> {
    /// Returns the similarity coefficient between the two sets.
    fn coefficient(&self, x: &[T], y: &[T]) -> F;

    /// Returns the name of the coefficient.
    fn name(&self) -> &'static str;

    /// Returns the dissimilarity between the two sets, i.e. `1 - coefficient`.
    fn dissimilarity(&self, x: &[T], y: &[T]) -> F {
        F::ONE - self.coefficient(x, y)
    }
}

/// The `Coefficient` backed by [`jaccard`].
pub struct Jaccard;

impl<T: Copy + Ord, F: Float> Coefficient<T, F> for Jaccard {
    fn coefficient(&self, x: &[T], y: &[T]) -> F {
        jaccard(x, y)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// The `Coefficient` backed by [`overlap`].
pub struct Overlap;

impl<T: Copy + Ord, F: Float> Coefficient<T, F> for Overlap {
    fn coefficient(&self, x: &[T], y: &[T]) -> F {
        overlap(x, y)
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}
