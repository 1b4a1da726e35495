//! Error types shared by the engine and its driver.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scoring, filtering, or loading words.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or pattern does not have the configured length.
    #[error("{what} `{value}` has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        value: String,
        expected: usize,
        actual: usize,
    },

    #[error("word length {0} is out of range (1..={})", crate::MAX_WORD_LENGTH)]
    InvalidWordLength(usize),

    #[error("word `{word}` contains `{letter}`, only letters a-z are allowed")]
    InvalidLetter { word: String, letter: char },

    /// A reported feedback mark outside of the recognized alphabet.
    #[error("invalid color `{mark}` at position {position} (use g/y/b or 2/1/0)")]
    InvalidColor { position: usize, mark: char },

    #[error("feedback has {actual} colors, expected {expected}")]
    LengthColor { expected: usize, actual: usize },

    #[error("entropy is undefined over an empty dictionary")]
    EmptyDictionary,

    /// Reduction left nothing: the feedback contradicts every remaining word.
    #[error("no words are consistent with {guess} → {pattern}")]
    NoWordsPossible { guess: String, pattern: String },

    #[error("could not open word list {}", .path.display())]
    FileOpening {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: `{word}` has length {actual}, expected {expected}")]
    LengthWord {
        line: usize,
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("failed to allocate storage for {0} words")]
    Allocation(usize),
}

impl WordleError {
    /// Process exit code the driver reports for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            WordleError::FileOpening { .. } => 2,
            WordleError::Allocation(_) => 3,
            WordleError::LengthWord { .. } => 4,
            WordleError::LengthColor { .. } => 5,
            WordleError::InvalidColor { .. } => 6,
            WordleError::NoWordsPossible { .. } => 7,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordleError>;
