//! Narrowing the dictionary with observed feedback.

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackPattern;
use crate::word::{Dictionary, Word};

/// Keep the words of `dictionary` that would have produced `observed` for `guess`.
///
/// The kept words stay in their original order. An empty result means the
/// feedback contradicts every word and is reported as `NoWordsPossible`.
pub fn reduce(
    dictionary: &Dictionary,
    guess: &Word,
    observed: FeedbackPattern,
) -> Result<Dictionary> {
    dictionary.check_word("guess", guess)?;
    if observed.len() != dictionary.word_length() {
        return Err(WordleError::LengthMismatch {
            what: "feedback",
            value: observed.to_letter_string(),
            expected: dictionary.word_length(),
            actual: observed.len(),
        });
    }

    let kept: Vec<Word> = dictionary
        .iter()
        .filter(|secret| {
            FeedbackPattern::calculate_unchecked(guess.as_bytes(), secret.as_bytes()) == observed
        })
        .cloned()
        .collect();

    log::debug!(
        "{} {}: {} -> {} words",
        guess,
        observed.to_letter_string(),
        dictionary.len(),
        kept.len()
    );

    if kept.is_empty() {
        return Err(WordleError::NoWordsPossible {
            guess: guess.to_string(),
            pattern: observed.to_letter_string(),
        });
    }
    Ok(Dictionary::from_checked(dictionary.word_length(), kept))
}

/// Like [`reduce`], but takes the feedback as reported by a player, e.g. "gybbb".
pub fn reduce_reported(dictionary: &Dictionary, guess: &Word, reported: &str) -> Result<Dictionary> {
    dictionary.check_word("guess", guess)?;
    let observed = FeedbackPattern::parse(reported, dictionary.word_length())?;
    reduce(dictionary, guess, observed)
}
