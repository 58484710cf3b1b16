//! Answer normalization.
//!
//! Every comparison in the engine starts here. Normalization has to erase the
//! differences players don't care about (casing, accents, punctuation, a
//! leading "the") without erasing the letters that tell two answers apart.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Words dropped from the front of an answer while more than one word remains.
const LEADING_FILLERS: &[&str] = &[
    "my", "your", "his", "her", "their", "our", "its", "a", "an", "the",
];

/// Spelling-to-sound substitutions applied anywhere in a word, in order.
const RESPELLINGS: &[(&str, &str)] = &[
    ("ph", "f"),
    ("ough", "o"),
    ("eigh", "e"),
    ("aigh", "e"),
    ("ight", "ite"),
    ("ght", "t"),
];

/// Vowel digraphs that all collapse to a plain `e`.
const VOWEL_PAIRS: &[(&str, &str)] = &[("ay", "e"), ("ey", "e"), ("ea", "e"), ("ee", "e")];

static QUESTION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:what|who|where|when) (?:is|are|was|were) ")
        .expect("question phrase pattern must compile")
});

/// Normalize a string for answer comparison.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Ligature expansion (`ß` -> `ss`, `æ` -> `ae`, `œ` -> `oe`)
/// 3. Unicode NFD decomposition, dropping the combining marks
/// 4. Dashes of every kind become spaces
/// 5. Anything that is not a letter, digit, whitespace or `&` is removed
/// 6. `&` becomes the word `and`
/// 7. Whitespace is collapsed and trimmed
/// 8. Leading possessives and articles are dropped while more than one word
///    remains
///
/// The result is stable: normalizing it again returns it unchanged.
pub fn normalize(text: &str) -> String {
    let cleaned = text
        .to_lowercase()
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('œ', "oe")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if is_dash(c) { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '&')
        .collect::<String>()
        .replace('&', " and ");

    let words = cleaned.split_whitespace().collect::<Vec<_>>();

    let mut start = 0;
    while words.len() - start > 1 && LEADING_FILLERS.contains(&words[start]) {
        start += 1;
    }

    words[start..].join(" ")
}

/// Normalize and remove every space, so that `"cray-cray"`, `"cray cray"` and
/// `"craycray"` all compare equal.
pub fn compress(text: &str) -> String {
    normalize(text).split_whitespace().collect()
}

/// Drop a leading `"what is "`-style phrase from an already normalized answer.
///
/// The remainder is normalized again so an article that followed the phrase
/// goes too: `"what is a banana"` becomes `"banana"`.
pub fn strip_question_phrase(normalized: &str) -> String {
    match QUESTION_PHRASE.find(normalized) {
        Some(phrase) => normalize(&normalized[phrase.end()..]),
        None => normalized.to_string(),
    }
}

/// Rewrite a normalized answer the way it sounds, word by word, and join the
/// words without separators.
///
/// `"phone"` and `"fone"` both become `"fone"`; `"night"` and `"nite"` both
/// become `"nite"`.
pub fn phonetic_respell(normalized: &str) -> String {
    normalized.split_whitespace().map(respell_word).collect()
}

fn respell_word(word: &str) -> String {
    let mut respelled = RESPELLINGS
        .iter()
        .fold(word.to_string(), |w, (from, to)| w.replace(from, to));

    if let Some(rest) = respelled.strip_prefix("kn") {
        respelled = format!("n{rest}");
    } else if let Some(rest) = respelled.strip_prefix("wr") {
        respelled = format!("r{rest}");
    }

    if let Some(stem) = respelled.strip_suffix("mb") {
        respelled = format!("{stem}m");
    } else if let Some(stem) = respelled.strip_suffix("bt") {
        respelled = format!("{stem}t");
    }

    let respelled = VOWEL_PAIRS
        .iter()
        .fold(respelled, |w, (from, to)| w.replace(from, to));

    collapse_repeats(&respelled)
}

/// Squash runs of the same character into one (`"balloon"` -> `"balon"`).
fn collapse_repeats(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous = None;
    for c in word.chars() {
        if previous != Some(c) {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

const fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}')
}
