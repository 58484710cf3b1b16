//! Jaro-Winkler similarity.
//!
//! Well suited to short strings such as single answer words: transposed or
//! missing letters cost little and a shared beginning is rewarded.

/// Boost applied per shared prefix character.
const PREFIX_WEIGHT: f64 = 0.1;
/// Longest shared prefix that earns the boost.
const MAX_PREFIX_LEN: usize = 4;

/// Jaro similarity between two strings, in `[0, 1]`.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let a = s1.chars().collect::<Vec<_>>();
    let b = s2.chars().collect::<Vec<_>>();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &c) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == c {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_order = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_order = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_order.zip(b_order).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = half_transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity between two strings, in `[0, 1]`.
///
/// `1.0` only for identical strings (two empty strings included); `0.0` when
/// exactly one of them is empty.
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    let jaro = jaro(s1, s2);
    if jaro >= 1.0 {
        return jaro;
    }

    let prefix = s1
        .chars()
        .zip(s2.chars())
        .take(MAX_PREFIX_LEN)
        .take_while(|(a, b)| a == b)
        .count();

    (jaro + prefix as f64 * PREFIX_WEIGHT * (1.0 - jaro)).min(1.0 - f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_identical_and_empty() {
        assert_eq!(jaro_winkler("paris", "paris"), 1.0);
        assert_eq!(jaro_winkler("", ""), 1.0);
        assert_eq!(jaro_winkler("", "paris"), 0.0);
        assert_eq!(jaro_winkler("paris", ""), 0.0);
    }

    #[test]
    fn test_classic_pairs() {
        assert!(approx(jaro("martha", "marhta"), 0.944));
        assert!(approx(jaro_winkler("martha", "marhta"), 0.961));
        assert!(approx(jaro_winkler("dwayne", "duane"), 0.840));
        assert!(approx(jaro_winkler("dixon", "dicksonx"), 0.813));
    }

    #[test]
    fn test_transposition_typo_scores_high() {
        assert!(jaro_winkler("recieve", "receive") > 0.95);
    }

    #[test]
    fn test_no_common_characters() {
        assert_eq!(jaro_winkler("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        for (a, b) in [("nite", "night"), ("washington", "washingtn"), ("cat", "act")] {
            assert!(approx(jaro_winkler(a, b), jaro_winkler(b, a)));
        }
    }

    #[test]
    fn test_unicode_counts_characters() {
        assert!(approx(jaro_winkler("café", "cafe"), jaro_winkler("cafx", "cafe")));
    }

    #[test]
    fn test_only_identical_strings_reach_one() {
        assert!(jaro_winkler("aaaa", "aaab") < 1.0);
        assert!(jaro_winkler("abcd", "abcdx") < 1.0);
    }
}
