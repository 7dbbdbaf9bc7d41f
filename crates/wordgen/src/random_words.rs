//! Generate random words for use in benchmarks and tests.

use std::collections::BTreeSet;

use rand::prelude::*;

/// Generates a random word of a given length from a given alphabet.
///
/// # Arguments:
///
/// * `length`: length of the word to generate.
/// * `alphabet`: the alphabet from which to draw characters
/// * `rng`: random number generator.
#[must_use]
pub fn random_word<R: Rng>(length: usize, alphabet: &[char], rng: &mut R) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Generate a randomized dataset of words.
///
/// # Arguments:
///
/// * `cardinality`: number of words to generate.
/// * `min_len`: minimum length of any word
/// * `max_len`: maximum length of any word
/// * `alphabet`: the alphabet from which to draw characters
/// * `seed`: for the random number generator
#[must_use]
pub fn random_words(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            random_word(len, &alphabet, &mut rng)
        })
        .collect()
}

/// Generate pairs of independent random words that share a length.
///
/// # Arguments:
///
/// * `cardinality`: number of pairs to generate.
/// * `length`: length of every word
/// * `alphabet`: the alphabet from which to draw characters
/// * `seed`: for the random number generator
#[must_use]
pub fn equal_length_pairs(cardinality: usize, length: usize, alphabet: &str, seed: u64) -> Vec<(String, String)> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            (
                random_word(length, &alphabet, &mut rng),
                random_word(length, &alphabet, &mut rng),
            )
        })
        .collect()
}

/// Generate pairs of words in which the second word differs from the first
/// in exactly `substitutions` character positions.
///
/// The substituted positions are distinct and every replacement character
/// differs from the one it replaces, so the number of differing positions is
/// exact rather than an upper bound.
///
/// # Arguments:
///
/// * `cardinality`: number of pairs to generate.
/// * `length`: length of every word
/// * `substitutions`: number of positions at which the words of a pair differ
/// * `alphabet`: the alphabet from which to draw characters
/// * `seed`: for the random number generator
///
/// # Panics
///
/// * If `substitutions` is greater than `length`.
/// * If the alphabet has fewer than two distinct characters.
#[must_use]
pub fn substituted_pairs(
    cardinality: usize,
    length: usize,
    substitutions: usize,
    alphabet: &str,
    seed: u64,
) -> Vec<(String, String)> {
    assert!(
        substitutions <= length,
        "cannot substitute {substitutions} positions in words of length {length}"
    );
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    assert!(
        alphabet.iter().collect::<BTreeSet<_>>().len() > 1,
        "the alphabet must contain at least two distinct characters"
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let x = random_word(length, &alphabet, &mut rng);
            let mut y = x.chars().collect::<Vec<_>>();
            for i in rand::seq::index::sample(&mut rng, length, substitutions) {
                let original = y[i];
                let mut replacement = alphabet[rng.gen_range(0..alphabet.len())];
                while replacement == original {
                    replacement = alphabet[rng.gen_range(0..alphabet.len())];
                }
                y[i] = replacement;
            }
            (x, y.into_iter().collect())
        })
        .collect()
}
