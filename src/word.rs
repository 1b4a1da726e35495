//! Words and dictionaries.
//!
//! A [`Word`] is a validated run of lowercase ASCII letters. A [`Dictionary`]
//! is an ordered list of words that all share one length `L`; the length is
//! fixed when the dictionary is built and every guess is checked against it.

use crate::error::{Result, WordleError};
use crate::MAX_WORD_LENGTH;
use std::fmt;
use std::fs;
use std::path::Path;

/// A case-normalized word over the letters `a`..=`z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Trim and lowercase `s`, rejecting anything that is not a letter.
    pub fn new(s: &str) -> Result<Self> {
        let word = s.trim().to_ascii_lowercase();
        if let Some(letter) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordleError::InvalidLetter { word, letter });
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ordered sequence of words of one fixed length.
///
/// Duplicates are allowed. The engine never mutates a dictionary in place;
/// reduction builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, rejecting any word whose length is not `word_length`.
    pub fn new(word_length: usize, words: Vec<Word>) -> Result<Self> {
        check_word_length(word_length)?;
        for word in &words {
            check_length("word", word, word_length)?;
        }
        Ok(Self::from_checked(word_length, words))
    }

    /// Convenience constructor from plain strings.
    pub fn from_strs<I, S>(word_length: usize, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|s| Word::new(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(word_length, words)
    }

    pub(crate) fn from_checked(word_length: usize, words: Vec<Word>) -> Self {
        Self { word_length, words }
    }

    /// Parse a word list with one word per line. Blank lines are skipped.
    pub fn parse(text: &str, word_length: usize) -> Result<Self> {
        check_word_length(word_length)?;

        let capacity = text.lines().count();
        let mut words = Vec::new();
        words
            .try_reserve(capacity)
            .map_err(|_| WordleError::Allocation(capacity))?;

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let word = Word::new(line)?;
            if word.len() != word_length {
                return Err(WordleError::LengthWord {
                    line: index + 1,
                    actual: word.len(),
                    word: word.0,
                    expected: word_length,
                });
            }
            words.push(word);
        }

        Ok(Self::from_checked(word_length, words))
    }

    /// Load a word list from disk.
    pub fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordleError::FileOpening {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text, word_length)?;
        log::debug!(
            "loaded {} words of length {} from {}",
            dictionary.len(),
            word_length,
            path.display()
        );
        Ok(dictionary)
    }

    /// The built-in list of five-letter words.
    pub fn embedded() -> Result<Self> {
        Self::parse(
            include_str!("../dictionary/dictionary.txt"),
            crate::DEFAULT_WORD_LENGTH,
        )
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Fail with `LengthMismatch` unless `word` has this dictionary's length.
    pub fn check_word(&self, what: &'static str, word: &Word) -> Result<()> {
        check_length(what, word, self.word_length)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

pub(crate) fn check_length(what: &'static str, word: &Word, expected: usize) -> Result<()> {
    if word.len() != expected {
        return Err(WordleError::LengthMismatch {
            what,
            value: word.to_string(),
            expected,
            actual: word.len(),
        });
    }
    Ok(())
}

fn check_word_length(word_length: usize) -> Result<()> {
    if word_length == 0 || word_length > MAX_WORD_LENGTH {
        return Err(WordleError::InvalidWordLength(word_length));
    }
    Ok(())
}
