//! Game state for the guess → observe → reduce loop.
//!
//! The solver keeps the pool of allowed guesses, the dictionary of secrets
//! still possible, and the guesses made so far. All scoring and filtering is
//! delegated to the pure functions in [`crate::ranker`] and [`crate::reducer`].

use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::ranker::rank;
use crate::reducer::reduce;
use crate::word::{Dictionary, Word};
use crate::DEFAULT_MAX_GUESSES;
use std::collections::HashSet;

/// Result of analyzing a potential guess
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

/// The main Wordle solver
#[derive(Debug, Clone)]
pub struct WordleSolver {
    all_words: Dictionary,
    initial_answers: Dictionary,
    possible_answers: Dictionary,
    history: Vec<(Word, FeedbackPattern)>,
    max_guesses: usize,
}

impl WordleSolver {
    /// A solver whose guess pool is the answer dictionary itself.
    pub fn new(words: Dictionary) -> Self {
        Self {
            all_words: words.clone(),
            initial_answers: words.clone(),
            possible_answers: words,
            history: Vec::new(),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// A solver that may guess any word of `guesses` while only the words
    /// of `answers` can be the secret.
    pub fn with_guess_pool(answers: Dictionary, guesses: Dictionary) -> Result<Self> {
        for word in &guesses {
            answers.check_word("guess", word)?;
        }
        let mut solver = Self::new(answers);
        solver.all_words = guesses;
        Ok(solver)
    }

    pub fn set_max_guesses(&mut self, max_guesses: usize) {
        self.max_guesses = max_guesses;
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn word_length(&self) -> usize {
        self.possible_answers.word_length()
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_answers.len()
    }

    pub fn possible_answers(&self) -> &Dictionary {
        &self.possible_answers
    }

    pub fn all_words(&self) -> &Dictionary {
        &self.all_words
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    /// Fail with `LengthMismatch` unless `guess` has the game's word length.
    pub fn check_guess(&self, guess: &Word) -> Result<()> {
        self.possible_answers.check_word("guess", guess)
    }

    pub fn reset(&mut self) {
        self.possible_answers = self.initial_answers.clone();
        self.history.clear();
    }

    /// Narrow the possible answers to those consistent with `pattern`.
    ///
    /// On error, including `NoWordsPossible`, the state is left untouched.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<()> {
        self.possible_answers = reduce(&self.possible_answers, guess, pattern)?;
        self.history.push((guess.clone(), pattern));
        Ok(())
    }

    /// The words to rank: live answers first, then the rest of the guess pool.
    ///
    /// Ranking breaks ties by pool position, so an equal-entropy guess that
    /// could still be the secret wins over one that can't.
    fn candidate_pool(&self) -> Dictionary {
        let live: HashSet<&Word> = self.possible_answers.iter().collect();
        let words = self
            .possible_answers
            .iter()
            .chain(self.all_words.iter().filter(|w| !live.contains(w)))
            .cloned()
            .collect();
        Dictionary::from_checked(self.word_length(), words)
    }

    pub fn find_best_guess(&self) -> Result<Option<GuessAnalysis>> {
        Ok(self.find_best_guesses(1)?.into_iter().next())
    }

    pub fn find_best_guesses(&self, n: usize) -> Result<Vec<GuessAnalysis>> {
        if self.possible_answers.is_empty() {
            return Ok(vec![]);
        }

        let remaining = self.possible_answers.len();
        let pool = self.candidate_pool();
        let analyses = rank(&pool, &self.possible_answers)?
            .into_iter()
            .take(n)
            .map(|score| GuessAnalysis {
                expected_remaining: remaining as f64 / 2_f64.powf(score.entropy),
                is_possible_answer: score.index < remaining,
                word: score.word,
                entropy: score.entropy,
            })
            .collect();

        Ok(analyses)
    }

    /// Solve a puzzle given a function that provides feedback for each guess.
    /// Returns the sequence of guesses made.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Vec<(Word, FeedbackPattern)>>
    where
        F: FnMut(&Word) -> Result<FeedbackPattern>,
    {
        let mut guesses = Vec::new();

        for _ in 0..self.max_guesses {
            let best = match self.find_best_guess()? {
                Some(g) => g,
                None => break,
            };

            let pattern = get_feedback(&best.word)?;
            guesses.push((best.word.clone(), pattern));

            if pattern.is_win() {
                break;
            }

            self.apply_feedback(&best.word, pattern)?;
        }

        Ok(guesses)
    }

    /// Solve a puzzle knowing the secret word, scoring guesses against it.
    pub fn solve_for_target(&mut self, target: &Word) -> Result<Vec<(Word, FeedbackPattern)>> {
        self.possible_answers.check_word("secret", target)?;
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(guess, target))
    }
}
