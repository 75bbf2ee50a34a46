//! Winkler prefix adjustment.

/// Shared prefix characters beyond this count earn no further bonus.
pub const MAX_PREFIX_LEN: usize = 4;

/// Boosts a Jaro score by the shared prefix of `a` and `b`.
///
/// The prefix is taken on the strings as given, so unlike the Jaro score it
/// is case-sensitive. The result is rounded to two decimals, ties to even.
pub fn adjust(jaro: f64, a: &str, b: &str, scaling_factor: f64) -> f64 {
    round_to_hundredths(boost(jaro, a, b, scaling_factor))
}

/// The unrounded Winkler score.
pub(crate) fn boost(jaro: f64, a: &str, b: &str, scaling_factor: f64) -> f64 {
    let prefix = common_prefix_len(a, b).min(MAX_PREFIX_LEN) as f64;
    jaro + scaling_factor * prefix * (1.0 - jaro)
}

/// Number of leading characters `a` and `b` have in common.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(l, r)| l == r)
        .count()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
