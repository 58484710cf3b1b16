//! Anagram guard.
//!
//! A word built from the same letters as the answer is usually a different
//! word ("god" is not "dog"), so it must never be accepted just because it
//! scores well on similarity. The one exception is a single swap of two
//! neighbouring letters, which is a typo ("recieve" for "receive").

/// Whether `s2` is `s1` with exactly one pair of adjacent characters swapped.
pub fn is_transposition_typo(s1: &str, s2: &str) -> bool {
    let a = s1.chars().collect::<Vec<_>>();
    let b = s2.chars().collect::<Vec<_>>();
    if a.len() != b.len() {
        return false;
    }

    let diffs = (0..a.len()).filter(|&i| a[i] != b[i]).collect::<Vec<_>>();
    match diffs.as_slice() {
        &[i, j] => j == i + 1 && a[i] == b[j] && a[j] == b[i],
        _ => false,
    }
}

/// Whether the two strings are different arrangements of the same letters,
/// other than a transposition typo.
pub fn is_problematic_anagram(s1: &str, s2: &str) -> bool {
    if s1 == s2 || s1.chars().count() != s2.chars().count() {
        return false;
    }

    let mut a = s1.chars().collect::<Vec<_>>();
    let mut b = s2.chars().collect::<Vec<_>>();
    a.sort_unstable();
    b.sort_unstable();

    a == b && !is_transposition_typo(s1, s2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposition_typo() {
        assert!(is_transposition_typo("recieve", "receive"));
        assert!(is_transposition_typo("teh", "the"));
        assert!(is_transposition_typo("ab", "ba"));
    }

    #[test]
    fn test_not_transposition_typo() {
        assert!(!is_transposition_typo("receive", "receive"));
        assert!(!is_transposition_typo("dog", "god"));
        assert!(!is_transposition_typo("abcd", "badc"));
        assert!(!is_transposition_typo("cat", "cats"));
        assert!(!is_transposition_typo("cat", "cut"));
    }

    #[test]
    fn test_problematic_anagram() {
        assert!(is_problematic_anagram("god", "dog"));
        assert!(is_problematic_anagram("listen", "silent"));
        assert!(is_problematic_anagram("elvis", "lives"));
    }

    #[test]
    fn test_typos_and_non_anagrams_pass() {
        assert!(!is_problematic_anagram("recieve", "receive"));
        assert!(!is_problematic_anagram("dog", "dog"));
        assert!(!is_problematic_anagram("dog", "dig"));
        assert!(!is_problematic_anagram("dog", "dogs"));
        assert!(!is_problematic_anagram("", ""));
    }
}
