//! Word-against-word similarity.
//!
//! Combines the anagram guard, Double Metaphone, Jaro-Winkler, number words and
//! suffix inflections into one verdict. Short words get strict thresholds and
//! must start with the same letter; long words are forgiven more.

use crate::{
    anagram::is_problematic_anagram,
    numbers::normalize_numbers,
    phonetic::phonetic_match,
    similarity::jaro_winkler,
};

/// Suffixes removed to find a word's stem, with what replaces them.
const SUFFIX_REMOVALS: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ing", ""),
    ("ed", ""),
];

/// Suffixes appended to a word to inflect it.
const SUFFIX_ADDITIONS: &[&str] = &["s", "es", "ing", "ed"];

/// Shortest stem a removal may leave behind.
const MIN_STEM_LEN: usize = 2;

/// Shortest words whose inflections may match by sound.
const MIN_SOUND_ALIKE_LEN: usize = 4;

/// Map the first letter of a word to its articulatory class.
///
/// Letters voiced and unvoiced at the same place collapse together
/// (`c`/`k`, `g`/`j`, `f`/`v`, `p`/`b`, `t`/`d`, `s`/`z`, `m`/`n`). Vowels are
/// never grouped, so "iko" and "oki" stay apart.
pub fn phonetic_first_char(word: &str) -> Option<char> {
    word.chars().next().map(|c| match c.to_ascii_lowercase() {
        'c' | 'k' => 'k',
        'g' | 'j' => 'g',
        'f' | 'v' => 'f',
        'p' | 'b' => 'p',
        't' | 'd' => 't',
        's' | 'z' => 's',
        'm' | 'n' => 'm',
        other => other,
    })
}

/// Whether two normalized words should be treated as the same word.
///
/// Checked in order: identical words match, anagrams never match, then the
/// length-tiered phonetic and spelling thresholds, number words, and finally
/// suffix inflections.
pub fn are_similar(word1: &str, word2: &str) -> bool {
    if word1 == word2 {
        return true;
    }
    if is_problematic_anagram(word1, word2) {
        return false;
    }
    if passes_length_tier(word1, word2) {
        return true;
    }
    if normalize_numbers(word1) == normalize_numbers(word2) {
        return true;
    }
    inflections_match(word1, word2)
}

/// Thresholds picked by the shorter word's length.
///
/// The longer word may exceed the shorter one by at most the tier's growth
/// allowance, otherwise the tier does not apply.
fn passes_length_tier(word1: &str, word2: &str) -> bool {
    let len1 = word1.chars().count();
    let len2 = word2.chars().count();
    let (short, long) = (len1.min(len2), len1.max(len2));
    if short == 0 {
        return false;
    }
    let growth = long - short;

    let literal = word1.chars().next() == word2.chars().next();
    let phonetic_first = phonetic_first_char(word1) == phonetic_first_char(word2);
    let sounds_alike = phonetic_match(word1, word2);
    let score = jaro_winkler(word1, word2);

    match short {
        0..=3 => growth <= 1 && literal && sounds_alike && score >= 0.85,
        4..=5 => {
            growth <= 2
                && ((sounds_alike && phonetic_first && score >= 0.85)
                    || (score >= 0.92 && literal))
        }
        6..=8 => {
            growth <= 3
                && ((sounds_alike && phonetic_first && score >= 0.80)
                    || (score >= 0.88 && literal))
        }
        _ => growth <= 4 && ((sounds_alike && phonetic_first) || (score >= 0.85 && literal)),
    }
}

/// Compare the inflected forms of both words.
///
/// Any two forms that are identical count as a match. Forms that sound alike
/// count too, as long as at least one of them is an inflection and both
/// original words have four letters or more and share their first letter.
fn inflections_match(word1: &str, word2: &str) -> bool {
    let forms1 = inflections(word1);
    let forms2 = inflections(word2);

    if forms1.iter().any(|a| forms2.contains(a)) {
        return true;
    }

    let comparable = word1.chars().count() >= MIN_SOUND_ALIKE_LEN
        && word2.chars().count() >= MIN_SOUND_ALIKE_LEN
        && word1.chars().next() == word2.chars().next();

    comparable
        && forms1.iter().enumerate().any(|(i, a)| {
            forms2
                .iter()
                .enumerate()
                .any(|(j, b)| (i > 0 || j > 0) && phonetic_match(a, b))
        })
}

/// The word itself followed by its suffix variants, without duplicates.
pub fn inflections(word: &str) -> Vec<String> {
    let mut forms = vec![word.to_string()];
    if word.is_empty() {
        return forms;
    }

    for (suffix, replacement) in SUFFIX_REMOVALS {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.chars().count() < MIN_STEM_LEN {
            continue;
        }
        forms.push(format!("{stem}{replacement}"));
        if let Some(undoubled) = undouble(stem) {
            forms.push(undoubled.to_string());
        }
    }

    for suffix in SUFFIX_ADDITIONS {
        forms.push(format!("{word}{suffix}"));
    }
    if let Some(stem) = word.strip_suffix('y') {
        forms.push(format!("{stem}ies"));
    }

    let mut seen = std::collections::HashSet::new();
    forms.retain(|form| seen.insert(form.clone()));
    forms
}

/// `"runn"` -> `"run"`: drop the last letter of a stem ending in a doubled
/// consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.char_indices().rev();
    let (last_index, last) = chars.next()?;
    let (_, before) = chars.next()?;
    (last == before && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u')).then(|| &stem[..last_index])
}
