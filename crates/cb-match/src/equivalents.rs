//! Known groups of interchangeable answers.
//!
//! Groups are allowed to share members. "football" belongs both to the
//! American football group and to the soccer group, so `"nfl"` and `"soccer"`
//! each match `"football"` without matching each other. The helpers at the
//! bottom of this module make such overlaps visible.

use std::sync::LazyLock;

use crate::normalize::normalize;

/// Canonical key and the surface forms accepted for it.
pub const EQUIVALENT_TERMS: &[(&str, &[&str])] = &[
    (
        "world war 1",
        &[
            "world war 1",
            "world war i",
            "world war one",
            "ww1",
            "wwi",
            "first world war",
            "great war",
        ],
    ),
    (
        "world war 2",
        &[
            "world war 2",
            "world war ii",
            "world war two",
            "ww2",
            "wwii",
            "second world war",
        ],
    ),
    (
        "american football",
        &["american football", "football", "nfl", "gridiron"],
    ),
    (
        "soccer",
        &["soccer", "football", "association football", "futbol", "fifa"],
    ),
    ("basketball", &["basketball", "nba", "hoops"]),
    ("baseball", &["baseball", "mlb"]),
    ("ice hockey", &["ice hockey", "hockey", "nhl"]),
    (
        "united states",
        &[
            "united states",
            "united states of america",
            "usa",
            "us",
            "america",
        ],
    ),
    (
        "united kingdom",
        &["united kingdom", "uk", "great britain", "britain"],
    ),
    (
        "soviet union",
        &[
            "soviet union",
            "ussr",
            "union of soviet socialist republics",
        ],
    ),
    ("european union", &["european union", "eu"]),
    ("united nations", &["united nations", "un"]),
    ("new york city", &["new york city", "nyc", "new york"]),
    ("los angeles", &["los angeles", "la"]),
    (
        "washington dc",
        &["washington dc", "dc", "district of columbia"],
    ),
    ("television", &["television", "tv"]),
    ("dna", &["dna", "deoxyribonucleic acid"]),
];

/// Each group with its members normalized, built once.
static NORMALIZED_GROUPS: LazyLock<Vec<(&'static str, Vec<String>)>> = LazyLock::new(|| {
    EQUIVALENT_TERMS
        .iter()
        .map(|(key, members)| (*key, members.iter().map(|m| normalize(m)).collect()))
        .collect()
});

/// Whether two answers are the same after normalization or sit in the same
/// group of interchangeable terms.
pub fn check_equivalent_terms(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return true;
    }

    NORMALIZED_GROUPS
        .iter()
        .any(|(_, members)| members.contains(&a) && members.contains(&b))
}

/// Canonical keys of every group the term belongs to.
pub fn groups_containing(term: &str) -> Vec<&'static str> {
    let term = normalize(term);
    NORMALIZED_GROUPS
        .iter()
        .filter(|(_, members)| members.contains(&term))
        .map(|(key, _)| *key)
        .collect()
}

/// Normalized terms that appear in more than one group.
pub fn overlapping_terms() -> Vec<String> {
    let mut overlaps = NORMALIZED_GROUPS
        .iter()
        .flat_map(|(_, members)| members.iter())
        .filter(|term| {
            NORMALIZED_GROUPS
                .iter()
                .filter(|(_, members)| members.contains(term))
                .count()
                > 1
        })
        .cloned()
        .collect::<Vec<_>>();
    overlaps.sort();
    overlaps.dedup();
    overlaps
}
