use std::fs;
use wordle_entropy::{Dictionary, Word, WordleError, MAX_WORD_LENGTH};

#[test]
fn test_parse_normalizes_words() {
    let dictionary = Dictionary::parse("Crane\n\n  SLATE  \ntrace\n", 5).unwrap();
    let words: Vec<&str> = dictionary.iter().map(Word::as_str).collect();
    assert_eq!(words, vec!["crane", "slate", "trace"]);
    assert_eq!(dictionary.word_length(), 5);
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = Dictionary::parse("crane\n\ncranes\n", 5).unwrap_err();
    assert!(matches!(
        err,
        WordleError::LengthWord {
            line: 3,
            expected: 5,
            actual: 6,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_parse_rejects_non_letters() {
    assert!(matches!(
        Dictionary::parse("crane\ncr4ne\n", 5),
        Err(WordleError::InvalidLetter { letter: '4', .. })
    ));
}

#[test]
fn test_word_length_range() {
    assert!(matches!(
        Dictionary::new(0, vec![]),
        Err(WordleError::InvalidWordLength(0))
    ));
    assert!(matches!(
        Dictionary::new(MAX_WORD_LENGTH + 1, vec![]),
        Err(WordleError::InvalidWordLength(_))
    ));
    assert!(Dictionary::new(MAX_WORD_LENGTH, vec![]).is_ok());
}

#[test]
fn test_new_rejects_mixed_lengths() {
    assert!(matches!(
        Dictionary::from_strs(5, ["crane", "cran"]),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 4,
            ..
        })
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("wordle-entropy-{}.txt", std::process::id()));
    fs::write(&path, "alpha\nbravo\ndelta\n").unwrap();

    let dictionary = Dictionary::load(&path, 5).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains(&Word::new("bravo").unwrap()));
}

#[test]
fn test_load_missing_file() {
    let err = Dictionary::load("/definitely/not/here/words.txt", 5).unwrap_err();
    assert!(matches!(err, WordleError::FileOpening { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_embedded_dictionary() {
    let dictionary = Dictionary::embedded().unwrap();
    assert!(dictionary.len() > 400);
    assert!(dictionary.iter().all(|w| w.len() == 5));
    assert!(dictionary.contains(&Word::new("crane").unwrap()));
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        WordleError::LengthColor {
            expected: 5,
            actual: 4
        }
        .exit_code(),
        5
    );
    assert_eq!(
        WordleError::InvalidColor {
            position: 0,
            mark: 'q'
        }
        .exit_code(),
        6
    );
    assert_eq!(
        WordleError::NoWordsPossible {
            guess: "crane".into(),
            pattern: "BBBBB".into()
        }
        .exit_code(),
        7
    );
    assert_eq!(WordleError::Allocation(10).exit_code(), 3);
    assert_eq!(WordleError::EmptyDictionary.exit_code(), 1);
}
