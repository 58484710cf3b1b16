//! Answers made of several items ("Washington & Lincoln").

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    equivalents::check_equivalent_terms,
    normalize::{normalize, strip_question_phrase},
    words::are_similar,
};

static ITEM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+and\s+|&").expect("list separator pattern must compile")
});

/// Whether the answer lists several items.
pub fn is_list(answer: &str) -> bool {
    answer.contains('&') || answer.contains(',') || answer.contains(" and ")
}

/// Split a list answer into normalized items, in order.
///
/// `"and"` and `&` separate items just like commas do; empty items are
/// dropped.
pub fn normalize_list(text: &str) -> Vec<String> {
    ITEM_SEPARATOR
        .replace_all(text, ",")
        .split(',')
        .map(normalize)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Whether the answer looks like a multi-word name ("Romeo And Juliet"), in
/// which case it is not split into items.
pub fn is_proper_noun(answer: &str) -> bool {
    let tokens = answer.split_whitespace().collect::<Vec<_>>();
    tokens.len() >= 2
        && tokens
            .iter()
            .all(|token| token.chars().next().is_some_and(char::is_uppercase))
}

/// Whether every item of the correct list has a counterpart among the user's
/// items, in any order.
///
/// A single user item may stand for several correct items.
pub fn list_matches(user_answer: &str, correct_answer: &str) -> bool {
    let correct_items = normalize_list(correct_answer);
    let user_items = normalize_list(user_answer)
        .iter()
        .map(|item| strip_question_phrase(item))
        .collect::<Vec<_>>();

    if correct_items.is_empty() {
        return user_items.is_empty();
    }

    correct_items.iter().all(|correct| {
        user_items
            .iter()
            .any(|user| items_match(user, correct))
    })
}

fn items_match(user_item: &str, correct_item: &str) -> bool {
    let user = user_item.replace(' ', "");
    let correct = correct_item.replace(' ', "");
    user == correct || check_equivalent_terms(user_item, correct_item) || are_similar(&user, &correct)
}
