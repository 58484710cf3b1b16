//! The answer check itself.
//!
//! Stages run from cheapest and strictest to most lenient, and the first one
//! that accepts wins. List answers are decided entirely by the list stage.

use std::fmt;

use crate::{
    anagram::is_problematic_anagram,
    equivalents::check_equivalent_terms,
    list::{is_list, is_proper_noun, list_matches},
    normalize::{normalize, phonetic_respell, strip_question_phrase},
    parenthetical::handle_parenthetical_name,
    phonetic::phonetic_match,
    similarity::jaro_winkler,
    words::{are_similar, phonetic_first_char},
};

/// Answers up to this many words are compared as a whole.
const SHORT_ANSWER_MAX_WORDS: usize = 2;
/// Similarity needed alongside a phonetic match of the whole answer.
const PHONETIC_WHOLE_MIN_SCORE: f64 = 0.85;
/// Similarity needed when only the spelling is close.
const CLOSE_SPELLING_MIN_SCORE: f64 = 0.92;
/// Share of the correct words a longer answer must contain.
const MIN_WORD_COVERAGE: f64 = 0.8;

/// The stage of the check that accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    /// Same text once normalized and stripped of spaces.
    Compressed,
    /// Same text once respelled the way it sounds.
    PhoneticRespelling,
    /// Both answers belong to a known group of interchangeable terms.
    EquivalentTerms,
    /// The user gave one of the forms allowed by a parenthetical.
    Parenthetical,
    /// Every item of a list answer was found.
    ListItems,
    /// A short answer sounds like the correct one and is spelled close to it.
    PhoneticWhole,
    /// Each word of a short answer matches the word at the same position.
    AlignedWords,
    /// A short answer is spelled very close to the correct one.
    CloseSpelling,
    /// Most words of a longer answer were found.
    WordCoverage,
}

impl MatchReason {
    /// Stable snake case name, used in logs and metrics labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compressed => "compressed",
            Self::PhoneticRespelling => "phonetic_respelling",
            Self::EquivalentTerms => "equivalent_terms",
            Self::Parenthetical => "parenthetical",
            Self::ListItems => "list_items",
            Self::PhoneticWhole => "phonetic_whole",
            Self::AlignedWords => "aligned_words",
            Self::CloseSpelling => "close_spelling",
            Self::WordCoverage => "word_coverage",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the user's answer should count as the correct answer.
///
/// ```
/// use cb_match::check_answer;
///
/// assert!(check_answer("craycray", "cray-cray"));
/// assert!(check_answer("Honest Abe", "Abraham Lincoln (or Honest Abe)"));
/// assert!(!check_answer("xyz", "Paris"));
/// ```
pub fn check_answer(user_answer: &str, correct_answer: &str) -> bool {
    explain_answer(user_answer, correct_answer).is_some()
}

/// Points earned for an answer: all of `base_points` when it is accepted,
/// nothing otherwise.
pub fn calculate_points(user_answer: &str, correct_answer: &str, base_points: i32) -> i32 {
    if check_answer(user_answer, correct_answer) {
        base_points
    } else {
        0
    }
}

/// Run the check and report which stage accepted the answer, if any.
pub fn explain_answer(user_answer: &str, correct_answer: &str) -> Option<MatchReason> {
    let reason = evaluate(user_answer, correct_answer);
    tracing::trace!(
        user_answer,
        correct_answer,
        reason = reason.map(MatchReason::as_str),
        "answer evaluated"
    );
    reason
}

fn evaluate(user_answer: &str, correct_answer: &str) -> Option<MatchReason> {
    let user_normalized = strip_question_phrase(&normalize(user_answer));
    let correct_normalized = normalize(correct_answer);
    let user_compressed = without_spaces(&user_normalized);
    let correct_compressed = without_spaces(&correct_normalized);

    if user_compressed == correct_compressed {
        return Some(MatchReason::Compressed);
    }

    if phonetic_respell(&user_normalized) == phonetic_respell(&correct_normalized) {
        return Some(MatchReason::PhoneticRespelling);
    }

    if check_equivalent_terms(&user_normalized, correct_answer) {
        return Some(MatchReason::EquivalentTerms);
    }

    let parenthetical_match = handle_parenthetical_name(correct_answer)
        .iter()
        .map(|variant| normalize(variant))
        .any(|variant| user_normalized == variant || user_compressed == without_spaces(&variant));
    if parenthetical_match {
        return Some(MatchReason::Parenthetical);
    }

    if is_list(correct_answer) && !is_proper_noun(correct_answer) {
        return list_matches(user_answer, correct_answer).then_some(MatchReason::ListItems);
    }

    let user_words = user_normalized.split_whitespace().collect::<Vec<_>>();
    let correct_words = correct_normalized.split_whitespace().collect::<Vec<_>>();

    if correct_words.len() <= SHORT_ANSWER_MAX_WORDS {
        compare_short_answer(
            &user_compressed,
            &correct_compressed,
            &user_words,
            &correct_words,
        )
    } else {
        compare_long_answer(&user_words, &correct_words)
    }
}

fn compare_short_answer(
    user_compressed: &str,
    correct_compressed: &str,
    user_words: &[&str],
    correct_words: &[&str],
) -> Option<MatchReason> {
    if is_problematic_anagram(user_compressed, correct_compressed) {
        return None;
    }

    let score = jaro_winkler(user_compressed, correct_compressed);

    if phonetic_match(user_compressed, correct_compressed)
        && phonetic_first_char(user_compressed) == phonetic_first_char(correct_compressed)
        && score >= PHONETIC_WHOLE_MIN_SCORE
    {
        return Some(MatchReason::PhoneticWhole);
    }

    if user_words.len() == correct_words.len()
        && user_words
            .iter()
            .zip(correct_words)
            .all(|(user, correct)| are_similar(user, correct))
    {
        return Some(MatchReason::AlignedWords);
    }

    let same_first_letter = !user_compressed.is_empty()
        && user_compressed.chars().next() == correct_compressed.chars().next();
    (score >= CLOSE_SPELLING_MIN_SCORE && same_first_letter).then_some(MatchReason::CloseSpelling)
}

fn compare_long_answer(user_words: &[&str], correct_words: &[&str]) -> Option<MatchReason> {
    let found = correct_words
        .iter()
        .filter(|correct| user_words.iter().any(|user| are_similar(user, correct)))
        .count();
    let coverage = found as f64 / correct_words.len() as f64;

    (coverage >= MIN_WORD_COVERAGE).then_some(MatchReason::WordCoverage)
}

fn without_spaces(normalized: &str) -> String {
    normalized.split_whitespace().collect()
}
