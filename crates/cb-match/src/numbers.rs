//! Number words to digits.

use std::{collections::HashMap, sync::LazyLock};

const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("forty", "40"),
    ("fifty", "50"),
    ("sixty", "60"),
    ("seventy", "70"),
    ("eighty", "80"),
    ("ninety", "90"),
    ("hundred", "100"),
    ("thousand", "1000"),
    ("million", "1000000"),
];

static NUMBER_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NUMBER_WORDS.iter().copied().collect());

/// Replace whole number words with their digits.
///
/// Only single words are mapped, so `"twenty one"` becomes `"20 1"`, which is
/// still enough to equate the two spellings a player might type.
pub fn normalize_numbers(text: &str) -> String {
    text.split_whitespace()
        .map(|word| NUMBER_TABLE.get(word).copied().unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
