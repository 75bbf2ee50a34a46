//! Scoring one string against a collection of candidates.
//!
//! Results always follow candidate order. Evaluation stops at the first
//! invalid candidate and reports it by index.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Argument, Result, require};
use crate::options::JaroOptions;
use crate::similarity::score_pair;

/// A candidate and its score against the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Position of the candidate in the input collection.
    pub index: usize,
    /// The candidate string as given.
    pub candidate: String,
    /// Similarity to the query under the options used for ranking.
    pub score: f64,
}

/// Scores `a` against every candidate, in input order.
///
/// A single candidate can be passed as a one-element array or as
/// `Some(candidate)`.
///
/// ```
/// use jaro_winkler::{JaroOptions, similarity_batch};
///
/// let scores = similarity_batch("cat", ["cat", "xyz"], &JaroOptions::default()).unwrap();
/// assert_eq!(scores, vec![1.0, 0.0]);
/// ```
pub fn similarity_batch<'a, 'b, I>(
    a: impl Into<Option<&'a str>>,
    candidates: I,
    options: &JaroOptions,
) -> Result<Vec<f64>>
where
    I: IntoIterator,
    I::Item: Into<Option<&'b str>>,
{
    let a = require(a.into(), Argument::First)?;
    warn_if_unbounded(options);

    let scores = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| -> Result<f64> {
            let candidate = require(candidate.into(), Argument::Candidate(index))?;
            Ok(score_pair(a, candidate, options))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(candidates = scores.len(), "Scored batch");
    Ok(scores)
}

/// Parallel form of [`similarity_batch`] over a slice.
///
/// Candidates are validated up front, so the reported error is always the
/// one with the lowest index.
#[cfg(feature = "parallel")]
pub fn par_similarity_batch<'a>(
    a: impl Into<Option<&'a str>>,
    candidates: &[&str],
    options: &JaroOptions,
) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    let a = require(a.into(), Argument::First)?;
    for (index, &candidate) in candidates.iter().enumerate() {
        require(Some(candidate), Argument::Candidate(index))?;
    }
    warn_if_unbounded(options);

    let scores: Vec<f64> = candidates
        .par_iter()
        .map(|candidate| score_pair(a, candidate, options))
        .collect();

    tracing::debug!(candidates = scores.len(), "Scored batch in parallel");
    Ok(scores)
}

/// Candidates scoring at least `min_score`, best first.
///
/// Equal scores keep their input order.
pub fn rank<'a, 'b, I>(
    a: impl Into<Option<&'a str>>,
    candidates: I,
    options: &JaroOptions,
    min_score: f64,
) -> Result<Vec<RankedCandidate>>
where
    I: IntoIterator,
    I::Item: Into<Option<&'b str>>,
{
    let a = require(a.into(), Argument::First)?;
    warn_if_unbounded(options);

    let mut ranked = Vec::new();
    let mut scored = 0usize;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let candidate = require(candidate.into(), Argument::Candidate(index))?;
        let score = score_pair(a, candidate, options);
        scored += 1;
        if score >= min_score {
            ranked.push(RankedCandidate {
                index,
                candidate: candidate.to_string(),
                score,
            });
        }
    }

    ranked.sort_by(|l, r| r.score.partial_cmp(&l.score).unwrap_or(Ordering::Equal));

    tracing::debug!(
        candidates = scored,
        kept = ranked.len(),
        min_score,
        "Ranked candidates"
    );
    Ok(ranked)
}

/// The highest scoring candidate, or `None` when there are no candidates.
pub fn best_match<'a, 'b, I>(
    a: impl Into<Option<&'a str>>,
    candidates: I,
    options: &JaroOptions,
) -> Result<Option<RankedCandidate>>
where
    I: IntoIterator,
    I::Item: Into<Option<&'b str>>,
{
    Ok(rank(a, candidates, options, f64::NEG_INFINITY)?
        .into_iter()
        .next())
}

fn warn_if_unbounded(options: &JaroOptions) {
    if !options.is_bounded() {
        tracing::warn!(
            scaling_factor = options.scaling_factor,
            "Scaling factor outside [0, 0.25], scores may leave [0, 1]"
        );
    }
}
