//! Ranking a pool of guesses by entropy.

use crate::entropy::entropy;
use crate::error::{Result, WordleError};
use crate::word::{Dictionary, Word};
use crate::TIE_EPSILON;
use rayon::prelude::*;

/// A guess from the candidate pool together with its entropy in bits.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub word: Word,
    /// Position of `word` in the candidate pool it was ranked from.
    pub index: usize,
    pub entropy: f64,
}

/// Order scores best first, breaking ties by pool index.
///
/// Scores are walked from the highest entropy down and grouped into tie
/// clusters: a score joins the current cluster while it is within
/// `TIE_EPSILON` of the cluster's first (highest) entry. Clusters keep
/// their entropy order; inside a cluster the lower index comes first.
pub fn sort_scores(mut scores: Vec<CandidateScore>) -> Vec<CandidateScore> {
    scores.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut cluster = 0usize;
    let mut leader: Option<f64> = None;
    let mut keyed: Vec<(usize, CandidateScore)> = scores
        .into_iter()
        .map(|score| {
            match leader {
                Some(top) if top - score.entropy < TIE_EPSILON => {}
                Some(_) => {
                    cluster += 1;
                    leader = Some(score.entropy);
                }
                None => leader = Some(score.entropy),
            }
            (cluster, score)
        })
        .collect();

    keyed.sort_by_key(|(cluster, score)| (*cluster, score.index));
    keyed.into_iter().map(|(_, score)| score).collect()
}

/// Score every word in `candidates` against `dictionary`, best first.
///
/// Entropies within `TIE_EPSILON` of each other tie, and ties keep the
/// order the candidates were given in. Each candidate is scored on its own
/// histogram, so the scan runs on rayon's pool; results are gathered in
/// candidate order before sorting.
pub fn rank(candidates: &Dictionary, dictionary: &Dictionary) -> Result<Vec<CandidateScore>> {
    if dictionary.is_empty() {
        return Err(WordleError::EmptyDictionary);
    }

    let scores = candidates
        .words()
        .par_iter()
        .enumerate()
        .map(|(index, word)| -> Result<CandidateScore> {
            let entropy = entropy(word, dictionary)?;
            log::trace!("{word}: {entropy:.6} bits");
            Ok(CandidateScore {
                word: word.clone(),
                index,
                entropy,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let scores = sort_scores(scores);

    if let Some(best) = scores.first() {
        log::debug!(
            "ranked {} candidates over {} words, best {} ({:.3} bits)",
            scores.len(),
            dictionary.len(),
            best.word,
            best.entropy
        );
    }
    Ok(scores)
}
