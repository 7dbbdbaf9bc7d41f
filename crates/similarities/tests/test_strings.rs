#![allow(missing_docs)]

use test_case::test_case;

use similarities::number::Addition;
use similarities::strings::{hamming, jaccard, jaccard_ci, overlap, overlap_ci};
use similarities::Error;

use wordgen::random_words::{equal_length_pairs, random_words, substituted_pairs};

#[test_case("naphthalising", "objectivising", 8; "classic example")]
#[test_case("karolin", "kathrin", 3; "wikipedia names")]
#[test_case("karolin", "kerstin", 3; "more wikipedia names")]
#[test_case("1011101", "1001001", 2; "wikipedia bits")]
#[test_case("", "", 0; "empty strings")]
#[test_case("café", "cafe", 1; "multi byte characters")]
fn hamming_distances(x: &str, y: &str, expected: u64) {
    assert_eq!(hamming(x, y), Ok(expected));
    assert_eq!(hamming(y, x), Ok(expected));
}

#[test_case("suspicious", "delicious"; "one character short")]
#[test_case("", "delicious"; "one side empty")]
#[test_case("café", "cafés"; "multi byte characters")]
fn hamming_unequal_lengths(x: &str, y: &str) {
    let (left, right) = (x.chars().count(), y.chars().count());
    assert_eq!(hamming::<u64>(x, y), Err(Error::UnequalLengths { left, right }));
    assert_eq!(hamming::<u64>(y, x), Err(Error::UnequalLengths { left: right, right: left }));
}

#[test]
fn unequal_lengths_are_counted_in_characters() {
    // "café" is five bytes but four characters, the same number as "cafe".
    assert_eq!(hamming::<u32>("café", "cafe"), Ok(1));

    let error = hamming::<u32>("café", "ore");
    assert_eq!(error, Err(Error::UnequalLengths { left: 4, right: 3 }));

    let message = hamming::<u32>("suspicious", "delicious").unwrap_err().to_string();
    assert_eq!(message, "unequal string lengths: 10 vs 9 characters");
}

#[test]
fn jaccard_of_suspicious_and_delicious() {
    let coefficient: f64 = jaccard("suspicious", "delicious");
    assert!(coefficient.abs_diff(0.5556) <= 1e-4);
}

#[test]
fn overlap_of_suspicious_and_delicious() {
    let coefficient: f64 = overlap("suspicious", "delicious");
    assert!(coefficient.abs_diff(0.8333) <= 1e-4);
}

/// The substituted pairs are a ground truth for the Hamming distance.
#[test]
fn hamming_over_substituted_pairs() {
    for substitutions in 0..=16 {
        for (x, y) in substituted_pairs(10, 16, substitutions, "acgt", 42) {
            let distance = hamming::<u32>(&x, &y);
            assert_eq!(distance, Ok(substitutions as u32), "between {x} and {y}");
        }
    }
}

/// Symmetry and bounds of the distance over random equal-length pairs.
#[test]
fn hamming_over_random_pairs() {
    let length = 24;
    for (x, y) in equal_length_pairs(100, length, "abcdef", 11) {
        let distance: u64 = hamming(&x, &y).unwrap_or(u64::MAX);
        assert_eq!(hamming(&y, &x), Ok(distance));
        assert!(distance <= length as u64, "between {x} and {y}");
    }
}

/// Symmetry, range, and ordering of the coefficients over random words.
#[test]
fn coefficients_over_random_words() {
    let words = random_words(50, 0, 20, "abcdefghij", 7);
    for x in &words {
        for y in &words {
            let jac: f64 = jaccard(x, y);
            let ov: f64 = overlap(x, y);

            assert!((0.0..=1.0).contains(&jac), "jaccard of {x} and {y} was {jac}");
            assert!((0.0..=1.0).contains(&ov), "overlap of {x} and {y} was {ov}");
            assert!(jac <= ov, "jaccard of {x} and {y} exceeded their overlap");

            assert!((jac - jaccard::<f64>(y, x)).abs() < f64::EPSILON);
            assert!((ov - overlap::<f64>(y, x)).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn identical_words_are_fully_similar() {
    for word in random_words(100, 1, 30, "abcdefghijklmnopqrstuvwxyz", 13) {
        assert!((jaccard::<f64>(&word, &word) - 1.0).abs() < f64::EPSILON);
        assert!((overlap::<f64>(&word, &word) - 1.0).abs() < f64::EPSILON);
        assert_eq!(hamming::<u64>(&word, &word), Ok(0));
    }
}

#[test]
fn empty_strings_have_zero_similarity() {
    assert!(jaccard::<f64>("", "") < f64::EPSILON);
    assert!(overlap::<f64>("", "") < f64::EPSILON);
    assert!(jaccard::<f64>("", "delicious") < f64::EPSILON);
    assert!(overlap::<f64>("delicious", "") < f64::EPSILON);
}

#[test]
fn repeated_characters_do_not_change_the_character_sets() {
    let jac: f64 = jaccard("aab", "abb");
    assert!((jac - 1.0).abs() < f64::EPSILON);

    let ov: f64 = overlap("mississippi", "misp");
    assert!((ov - 1.0).abs() < f64::EPSILON);
}

#[test]
fn case_insensitive_variants_fold_case() {
    let jac: f64 = jaccard_ci("Suspicious", "DELICIOUS");
    assert!(jac.abs_diff(5.0 / 9.0) < f64::EPSILON);

    let ov: f64 = overlap_ci("SUSPICIOUS", "Delicious");
    assert!(ov.abs_diff(5.0 / 6.0) < f64::EPSILON);

    // The default comparison keeps the cases apart.
    let jac: f64 = jaccard("Suspicious", "DELICIOUS");
    assert!(jac < 5.0 / 9.0);
}
