//! Entropy of the feedback distribution a guess induces.
//!
//! A guess splits the live dictionary into buckets, one per feedback
//! pattern. The more evenly it splits, the more we learn from the answer.

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackPattern;
use crate::word::{Dictionary, Word};
use std::collections::BTreeMap;

/// Count how many secrets in `dictionary` produce each pattern for `guess`.
///
/// Counts always sum to `dictionary.len()`. The map iterates in pattern code
/// order, whatever order the dictionary was in.
pub fn pattern_histogram(
    guess: &Word,
    dictionary: &Dictionary,
) -> Result<BTreeMap<FeedbackPattern, usize>> {
    dictionary.check_word("guess", guess)?;

    let mut histogram = BTreeMap::new();
    for secret in dictionary {
        let pattern = FeedbackPattern::calculate_unchecked(guess.as_bytes(), secret.as_bytes());
        *histogram.entry(pattern).or_insert(0) += 1;
    }
    Ok(histogram)
}

/// Shannon entropy, in bits, of the patterns `guess` produces over `dictionary`.
///
/// Fails with `EmptyDictionary` when there is nothing to score against.
pub fn entropy(guess: &Word, dictionary: &Dictionary) -> Result<f64> {
    if dictionary.is_empty() {
        return Err(WordleError::EmptyDictionary);
    }
    let histogram = pattern_histogram(guess, dictionary)?;
    Ok(entropy_of_counts(histogram.values().copied(), dictionary.len()))
}

/// Sum `-p * log2(p)` over non-zero bucket counts, in the order given.
pub(crate) fn entropy_of_counts(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    let n = total as f64;
    let mut entropy = 0.0;
    for count in counts {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }
    // A single bucket gives -1 * log2(1) = -0.0
    entropy.max(0.0)
}
