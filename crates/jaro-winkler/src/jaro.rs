//! Raw Jaro similarity.
//!
//! Matching is directional: characters of one string are searched for in a
//! window of the other, left to right, and each hit consumes the first
//! unconsumed occurrence of that character anywhere in the other string.
//! Both directions are computed and combined with a transposition count.

/// Computes the Jaro similarity of two strings, ignoring case.
///
/// Returns 0.0 when either direction finds no matching characters, which
/// includes the case of an empty input.
///
/// ```
/// let score = jaro_winkler::jaro::score("MARTHA", "marhta");
/// assert!((score - 0.9444).abs() < 1e-4);
/// ```
pub fn score(a: &str, b: &str) -> f64 {
    let first = lowercase(a);
    let second = lowercase(b);

    // Roles follow the original lengths; on a tie `a` is the shorter one.
    let (shorter, longer) = if a.chars().count() > b.chars().count() {
        (second, first)
    } else {
        (first, second)
    };

    let m1 = matching_characters(&shorter, &longer);
    let m2 = matching_characters(&longer, &shorter);

    if m1.is_empty() || m2.is_empty() {
        return 0.0;
    }

    let matched = m1.len() as f64;
    let transposed = transpositions(&m1, &m2) as f64;

    let shorter_ratio = matched / shorter.len() as f64;
    let longer_ratio = m2.len() as f64 / longer.len() as f64;
    let ordered_ratio = (matched - transposed) / matched;

    (shorter_ratio + longer_ratio + ordered_ratio) / 3.0
}

/// Returns the characters of `x` that have a match in `y`, in the order found.
///
/// The search window for position `i` is `i ± min(|x|, |y|) / 2` in `y`. A hit
/// consumes the first unconsumed occurrence in all of `y`, which may sit left
/// of the window.
pub fn matching_characters(x: &[char], y: &[char]) -> Vec<char> {
    let limit = x.len().min(y.len()) / 2;
    let mut remaining: Vec<Option<char>> = y.iter().copied().map(Some).collect();
    let mut common = Vec::new();

    for (i, &c) in x.iter().enumerate() {
        let left = i.saturating_sub(limit);
        let right = (i + limit + 1).min(y.len());
        if left >= right || !remaining[left..right].contains(&Some(c)) {
            continue;
        }

        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(c)) {
            *slot = None;
        }
        common.push(c);
    }

    common
}

/// Half the number of positions where the two matching sets disagree.
///
/// The sets are compared position by position up to the shorter length.
pub fn transpositions(m1: &[char], m2: &[char]) -> usize {
    m1.iter().zip(m2).filter(|(l, r)| l != r).count() / 2
}

fn lowercase(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn martha_marhta() {
        let score = score("MARTHA", "MARHTA");
        assert!((score - 17.0 / 18.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn dixon_dicksonx() {
        let score = score("DIXON", "DICKSONX");
        assert!((score - 2.3 / 3.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(score("Jellyfish", "SMELLYFISH"), score("jellyfish", "smellyfish"));
    }

    #[test]
    fn no_shared_characters() {
        assert_eq!(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(score("", "abc"), 0.0);
        assert_eq!(score("abc", ""), 0.0);
    }

    #[test]
    fn single_characters_compare_exactly() {
        assert_eq!(score("a", "A"), 1.0);
        assert_eq!(score("a", "b"), 0.0);
    }

    #[test]
    fn match_outside_window_is_rejected() {
        // L = 2, so 'c' at position 0 only sees slots 0..3.
        assert!(matching_characters(&chars("cxyz"), &chars("abdc")).is_empty());
    }

    #[test]
    fn hit_consumes_first_occurrence_in_whole_string() {
        // The first 'a' of x finds the 'a' at slot 6 but consumes slot 0,
        // leaving slot 6 for the second 'a'.
        let common = matching_characters(&chars("pqrsaa"), &chars("atuvwxa"));
        assert_eq!(common, vec!['a', 'a']);
    }

    #[test]
    fn consumed_slots_are_not_matched_twice() {
        let common = matching_characters(&chars("aaa"), &chars("a"));
        assert_eq!(common, vec!['a']);
    }

    #[test]
    fn consumed_slots_never_match_real_characters() {
        // A consumed slot must not be mistaken for a literal '*'.
        assert_eq!(matching_characters(&chars("a*"), &chars("ab")), vec!['a']);
        assert!((score("a*", "ab") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn equal_lengths_keep_argument_order() {
        // Both directions find a different number of matches, and the first
        // argument takes the shorter role on a tie.
        let forward = score("babaa", "aaabb");
        let backward = score("aaabb", "babaa");
        assert!((forward - 2.55 / 3.0).abs() < 1e-12, "got {forward}");
        assert!((backward - 2.6 / 3.0).abs() < 1e-12, "got {backward}");
        assert_eq!(matching_characters(&chars("babaa"), &chars("aaabb")).len(), 4);
        assert_eq!(matching_characters(&chars("aaabb"), &chars("babaa")).len(), 5);
    }

    #[test]
    fn matching_keeps_discovery_order() {
        assert_eq!(
            matching_characters(&chars("martha"), &chars("marhta")),
            chars("martha")
        );
        assert_eq!(
            matching_characters(&chars("marhta"), &chars("martha")),
            chars("marhta")
        );
    }

    #[test]
    fn transpositions_floor_half_mismatches() {
        assert_eq!(transpositions(&chars("martha"), &chars("marhta")), 1);
        assert_eq!(transpositions(&chars("abc"), &chars("abd")), 0);
        assert_eq!(transpositions(&chars("abcd"), &chars("badc")), 2);
    }

    #[test]
    fn transpositions_truncate_to_shorter_set() {
        assert_eq!(transpositions(&chars("ab"), &chars("bacd")), 1);
        assert_eq!(transpositions(&chars(""), &chars("abc")), 0);
    }

    #[test]
    fn lowercase_expands_multi_char_mappings() {
        // U+0130 lowercases to 'i' followed by a combining dot.
        assert_eq!(lowercase("\u{130}").len(), 2);
        assert_eq!(score("\u{130}", "\u{130}"), 1.0);
    }

    proptest! {
        #[test]
        fn identical_strings_score_one(s in "[a-zA-Z0-9 ]{1,24}") {
            prop_assert_eq!(score(&s, &s), 1.0);
        }

        #[test]
        fn score_stays_in_unit_range(a in "[a-f]{1,16}", b in "[a-f]{1,16}") {
            let s = score(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }

        #[test]
        fn score_is_symmetric(a in "[a-f]{1,16}", b in "[a-f]{1,16}") {
            // With equal lengths the roles follow argument order, and the
            // transposition term differs when the two directions disagree on
            // the match count.
            let (x, y) = (chars(&a), chars(&b));
            prop_assume!(
                x.len() != y.len()
                    || matching_characters(&x, &y).len() == matching_characters(&y, &x).len()
            );
            prop_assert_eq!(score(&a, &b), score(&b, &a));
        }
    }
}
