//! # Wordle Entropy
//!
//! Picks the next guess in a fixed-length word-guessing game by maximizing
//! the Shannon entropy of the feedback pattern a guess would produce over
//! the words still possible.
//!
//! The engine is four pure operations:
//!
//! - [`FeedbackPattern::calculate`] colors a guess against an assumed secret.
//! - [`entropy::entropy`] scores one guess over the live dictionary.
//! - [`ranker::rank`] orders a pool of guesses by entropy.
//! - [`reducer::reduce`] keeps the words consistent with observed feedback.
//!
//! [`WordleSolver`] strings them together into a guess → observe → reduce loop.

pub mod entropy;
pub mod error;
pub mod feedback;
pub mod ranker;
pub mod reducer;
pub mod solver;
pub mod word;

pub use entropy::entropy;
pub use error::{Result, WordleError};
pub use feedback::{Feedback, FeedbackPattern};
pub use ranker::{rank, sort_scores, CandidateScore};
pub use reducer::{reduce, reduce_reported};
pub use solver::{GuessAnalysis, WordleSolver};
pub use word::{Dictionary, Word};

/// Word length of classic Wordle
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Longest supported word; 3^20 still fits a pattern code in a `u32`.
pub const MAX_WORD_LENGTH: usize = 20;

/// Entropies closer than this (in bits) rank as ties.
pub const TIE_EPSILON: f64 = 1e-9;

/// Guesses allowed per game before the solver gives up
pub const DEFAULT_MAX_GUESSES: usize = 6;
