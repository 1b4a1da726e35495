//! Feedback calculation for guesses.
//!
//! This module computes the feedback pattern (green/yellow/gray) for a guess
//! against a secret word, and parses feedback reported by a player.

use crate::error::{Result, WordleError};
use crate::word::Word;
use crate::MAX_WORD_LENGTH;
use std::fmt;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The letter used for this mark when reporting feedback.
    pub fn to_letter(self) -> char {
        match self {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'B',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u32 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Feedback::Absent,
            1 => Feedback::Present,
            _ => Feedback::Correct,
        }
    }
}

/// A complete feedback pattern for a guess of length `L`.
///
/// Encoded as a base-3 number where digit `i` is the mark at position `i`:
/// 0 (absent), 1 (present) or 2 (correct). Pattern = p0 + 3*p1 + 9*p2 + ...
///
/// Patterns order by code, which fixes the order buckets are visited in
/// when a histogram is summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern {
    code: u32,
    len: u8,
}

impl FeedbackPattern {
    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: &[Feedback]) -> Result<Self> {
        if feedbacks.is_empty() || feedbacks.len() > MAX_WORD_LENGTH {
            return Err(WordleError::InvalidWordLength(feedbacks.len()));
        }
        Ok(Self::encode(feedbacks))
    }

    fn encode(feedbacks: &[Feedback]) -> Self {
        let code = feedbacks
            .iter()
            .rev()
            .fold(0u32, |acc, fb| acc * 3 + fb.digit());
        Self {
            code,
            len: feedbacks.len() as u8,
        }
    }

    /// The pattern indicating all correct (winning)
    pub fn all_correct(len: usize) -> Result<Self> {
        Self::new(&vec![Feedback::Correct; len])
    }

    /// Calculate the feedback pattern for a guess against a secret word.
    ///
    /// This implements the standard Wordle feedback rules:
    /// - Green (Correct): Letter is in the correct position
    /// - Yellow (Present): Letter is in the word but wrong position
    /// - Gray (Absent): Letter is not in the word (or all instances accounted for)
    ///
    /// Greens claim their letters before any yellow is handed out, so a
    /// repeated guess letter never gets more marks than the secret has copies.
    pub fn calculate(guess: &Word, secret: &Word) -> Result<Self> {
        if guess.is_empty() {
            return Err(WordleError::InvalidWordLength(0));
        }
        if guess.len() > MAX_WORD_LENGTH {
            return Err(WordleError::LengthMismatch {
                what: "guess",
                value: guess.to_string(),
                expected: MAX_WORD_LENGTH,
                actual: guess.len(),
            });
        }
        crate::word::check_length("secret", secret, guess.len())?;
        Ok(Self::calculate_unchecked(guess.as_bytes(), secret.as_bytes()))
    }

    /// Scoring kernel. Both slices must be lowercase letters of the same,
    /// supported length.
    pub(crate) fn calculate_unchecked(guess: &[u8], secret: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), secret.len());
        debug_assert!(guess.len() <= MAX_WORD_LENGTH);

        let len = guess.len();
        let mut feedback = [Feedback::Absent; MAX_WORD_LENGTH];
        let mut secret_remaining = [0u8; 26];

        for i in 0..len {
            if guess[i] == secret[i] {
                feedback[i] = Feedback::Correct;
            } else {
                secret_remaining[(secret[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..len {
            if feedback[i] != Feedback::Correct {
                let idx = (guess[i] - b'a') as usize;
                if secret_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self::encode(&feedback[..len])
    }

    /// The base-3 encoding of this pattern.
    pub fn code(self) -> u32 {
        self.code
    }

    /// Number of marks in the pattern.
    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Convert pattern to its per-position feedbacks
    pub fn to_feedbacks(self) -> Vec<Feedback> {
        let mut code = self.code;
        (0..self.len)
            .map(|_| {
                let feedback = Feedback::from_digit(code % 3);
                code /= 3;
                feedback
            })
            .collect()
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self.code == 3u32.pow(self.len as u32) - 1
    }

    /// Parse reported feedback like "gybbb" or "21000".
    ///
    /// The length is checked before the marks, so "gyb" against a length of
    /// five is a `LengthColor` error even if it also holds a bad mark.
    pub fn parse(s: &str, len: usize) -> Result<Self> {
        let s = s.trim();
        let actual = s.chars().count();
        if actual != len {
            return Err(WordleError::LengthColor {
                expected: len,
                actual,
            });
        }
        let feedbacks = s
            .chars()
            .enumerate()
            .map(|(position, mark)| {
                Feedback::from_char(mark).ok_or(WordleError::InvalidColor { position, mark })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&feedbacks)
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }

    /// Display in the reporting alphabet, e.g. "GYBBB"
    pub fn to_letter_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_letter()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
