//! Single-pair similarity entry point.

use crate::error::{Argument, Result, require};
use crate::options::JaroOptions;
use crate::{jaro, winkler};

/// Similarity of two strings in `[0, 1]`.
///
/// Both values must be present and non-empty. With `options.winkler` set the
/// Jaro score gets the prefix bonus and is rounded to two decimals; otherwise
/// the raw Jaro score is returned as is.
///
/// ```
/// use jaro_winkler::{JaroOptions, similarity};
///
/// let score = similarity("MARTHA", "MARHTA", &JaroOptions::default()).unwrap();
/// assert_eq!(score, 0.96);
/// assert!(similarity(None::<&str>, "MARHTA", &JaroOptions::default()).is_err());
/// ```
pub fn similarity<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
    options: &JaroOptions,
) -> Result<f64> {
    let a = require(a.into(), Argument::First)?;
    let b = require(b.into(), Argument::Second)?;
    Ok(score_pair(a, b, options))
}

/// Scores an already validated pair.
pub(crate) fn score_pair(a: &str, b: &str, options: &JaroOptions) -> f64 {
    let raw = jaro::score(a, b);
    if !options.winkler {
        tracing::trace!(raw, "Scored pair");
        return raw;
    }

    let adjusted = winkler::adjust(raw, a, b, options.scaling_factor);
    tracing::trace!(raw, adjusted, "Scored pair");
    adjusted
}
