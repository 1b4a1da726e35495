use wordle_entropy::{
    rank, sort_scores, CandidateScore, Dictionary, Word, WordleError, TIE_EPSILON,
};

fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::from_strs(5, words).unwrap()
}

#[test]
fn test_best_first() {
    let secrets = dictionary(&["crane", "trace", "crate", "slate"]);
    let candidates = dictionary(&["moody", "crane", "fuzzy", "pygmy"]);

    let ranked = rank(&candidates, &secrets).unwrap();
    let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["crane", "moody", "fuzzy", "pygmy"]);
    assert_eq!(ranked[0].index, 1);
    assert!((ranked[0].entropy - 2.0).abs() < 1e-12);
}

#[test]
fn test_ties_keep_pool_order() {
    let secrets = dictionary(&["crane", "trace", "crate", "slate"]);

    let ranked = rank(&secrets, &secrets).unwrap();
    let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["crane", "trace", "crate", "slate"]);

    let reversed = dictionary(&["slate", "crate", "trace", "crane"]);
    let ranked = rank(&reversed, &secrets).unwrap();
    let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["slate", "crate", "trace", "crane"]);
}

#[test]
fn test_total_order() {
    let secrets = Dictionary::embedded().unwrap();
    let ranked = rank(&secrets, &secrets).unwrap();
    assert_eq!(ranked.len(), secrets.len());

    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let tied = (a.entropy - b.entropy).abs() < TIE_EPSILON;
        assert!(
            a.entropy > b.entropy || (tied && a.index < b.index),
            "{} ({}) before {} ({})",
            a.word,
            a.entropy,
            b.word,
            b.entropy
        );
    }
}

#[test]
fn test_repeatable() {
    let secrets = Dictionary::embedded().unwrap();
    let first = rank(&secrets, &secrets).unwrap();
    let second = rank(&secrets, &secrets).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_word_dictionary() {
    let secrets = dictionary(&["crane"]);
    let ranked = rank(&secrets, &secrets).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].word, "crane");
    assert_eq!(ranked[0].entropy, 0.0);
}

#[test]
fn test_empty_pool() {
    let secrets = dictionary(&["crane", "slate"]);
    let candidates = Dictionary::new(5, vec![]).unwrap();
    assert!(rank(&candidates, &secrets).unwrap().is_empty());
}

#[test]
fn test_empty_dictionary() {
    let secrets = Dictionary::new(5, vec![]).unwrap();
    let candidates = dictionary(&["crane"]);
    assert!(matches!(
        rank(&candidates, &secrets),
        Err(WordleError::EmptyDictionary)
    ));
}

#[test]
fn test_candidate_length_must_match() {
    let secrets = dictionary(&["crane", "slate"]);
    let candidates = Dictionary::from_strs(4, ["cran"]).unwrap();
    assert!(matches!(
        rank(&candidates, &secrets),
        Err(WordleError::LengthMismatch { .. })
    ));
}

fn score(word: &str, index: usize, entropy: f64) -> CandidateScore {
    CandidateScore {
        word: Word::new(word).unwrap(),
        index,
        entropy,
    }
}

#[test]
fn test_floating_noise_does_not_split_a_tie() {
    let scores = vec![
        score("trace", 1, 1.0000000005 + 2e-16),
        score("crane", 0, 1.0000000005 - 2e-16),
    ];
    let sorted = sort_scores(scores);
    let indices: Vec<usize> = sorted.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_ties_measured_from_cluster_leader() {
    let scores = vec![
        score("slate", 3, 2.0 - 1.5 * TIE_EPSILON),
        score("crate", 2, 2.0 - 0.5 * TIE_EPSILON),
        score("trace", 1, 1.0),
        score("crane", 0, 2.0),
    ];
    let sorted = sort_scores(scores);
    let indices: Vec<usize> = sorted.iter().map(|s| s.index).collect();
    // "slate" is within epsilon of "crate" but not of "crane", which leads the cluster.
    assert_eq!(indices, vec![0, 2, 3, 1]);
}
