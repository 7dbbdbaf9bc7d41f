#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]

//! Report similarity metrics over pairs of words.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use serde::{Deserialize, Serialize};

use similarities::strings::{hamming, jaccard, overlap};

fn main() -> Result<(), String> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    // Check that the output directory exists.
    if let Some(output_dir) = &args.output_dir {
        if !output_dir.exists() {
            return Err(format!("Output directory {output_dir:?} does not exist."));
        }
    }

    let pairs = if args.pairs.is_empty() {
        example_pairs()
    } else {
        args.pairs
    };

    make_reports(&pairs, args.precision, args.output_dir.as_deref())
}

/// Command line arguments for reporting similarity metrics over pairs of
/// words.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A pair of words to compare, given as `left,right`. May be repeated.
    /// When no pairs are given, a small set of example pairs is reported.
    #[arg(long = "pair", value_parser = parse_pair)]
    pairs: Vec<(String, String)>,
    /// Number of decimal places to print for the coefficients.
    #[arg(long, default_value = "4")]
    precision: usize,
    /// Output directory for the JSON report. No report is written when this
    /// is not given.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Parses a `left,right` argument into a pair of words.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once(',')
        .map(|(left, right)| (left.to_string(), right.to_string()))
        .ok_or_else(|| format!("expected a pair of words as `left,right`, got {s:?}"))
}

/// The pairs reported when none are given on the command line.
fn example_pairs() -> Vec<(String, String)> {
    [("naphthalising", "objectivising"), ("suspicious", "delicious")]
        .into_iter()
        .map(|(left, right)| (left.to_string(), right.to_string()))
        .collect()
}

/// Report the similarity metrics for each pair of words.
fn make_reports(pairs: &[(String, String)], precision: usize, output_dir: Option<&Path>) -> Result<(), String> {
    let mut reports = Vec::with_capacity(pairs.len());

    for (left, right) in pairs {
        info!("Comparing {left:?} and {right:?} ...");

        let report = Report::new(left, right);

        match report.hamming {
            Some(distance) => println!("Hamming distance between {left:?} and {right:?}: {distance}"),
            None => println!(
                "Hamming distance between {left:?} and {right:?}: undefined ({} vs {} characters)",
                report.left_len, report.right_len
            ),
        }
        println!(
            "Jaccard similarity between {left:?} and {right:?}: {:.precision$}",
            report.jaccard
        );
        println!(
            "Overlap coefficient between {left:?} and {right:?}: {:.precision$}",
            report.overlap
        );
        println!();

        reports.push(report);
    }

    if let Some(output_dir) = output_dir {
        save_reports(&reports, output_dir)?;
    }

    Ok(())
}

/// The similarity metrics for one pair of words.
#[derive(Debug, Serialize, Deserialize)]
struct Report<'a> {
    /// The first word.
    left: &'a str,
    /// The second word.
    right: &'a str,
    /// Number of characters in the first word.
    left_len: usize,
    /// Number of characters in the second word.
    right_len: usize,
    /// The Hamming distance between the words, when they have the same
    /// number of characters.
    hamming: Option<u64>,
    /// The Jaccard similarity between the character sets of the words.
    jaccard: f64,
    /// The overlap coefficient between the character sets of the words.
    overlap: f64,
}

impl<'a> Report<'a> {
    /// Computes all metrics for one pair of words.
    fn new(left: &'a str, right: &'a str) -> Self {
        Self {
            left,
            right,
            left_len: left.chars().count(),
            right_len: right.chars().count(),
            hamming: hamming(left, right).ok(),
            jaccard: jaccard(left, right),
            overlap: overlap(left, right),
        }
    }
}

/// Save the reports as pretty JSON in the given directory.
fn save_reports(reports: &[Report], dir: &Path) -> Result<(), String> {
    let path = dir.join("word_pairs.json");
    let contents = serde_json::to_string_pretty(reports).map_err(|e| e.to_string())?;
    std::fs::write(&path, contents).map_err(|e| e.to_string())?;
    info!("Saved the reports to {path:?}.");
    Ok(())
}
