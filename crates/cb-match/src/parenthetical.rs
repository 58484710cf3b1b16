//! Alternate names written in parentheses.

use std::sync::LazyLock;

use regex::Regex;

/// `"X (or Y)"`: both X and Y are acceptable.
static OR_ALTERNATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(.+?)\s*\(\s*or\s+(.+?)\s*\)\s*$")
        .expect("alternate name pattern must compile")
});

/// `"before (middle) after"`, first parenthesis only.
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\(([^)]*)\)(.*)$").expect("parenthetical pattern must compile")
});

/// All the forms of a canonical answer that should be accepted.
///
/// - `"Abraham Lincoln (or Honest Abe)"` gives exactly
///   `["Abraham Lincoln", "Honest Abe"]`.
/// - `"Pluto (dwarf planet)"` gives the original, `"Pluto dwarf planet"` and
///   `"Pluto"`; text after the parenthesis is kept in the short form.
/// - Anything else gives just the original.
pub fn handle_parenthetical_name(answer: &str) -> Vec<String> {
    if let Some(caps) = OR_ALTERNATE.captures(answer) {
        return dedup(vec![caps[1].trim().to_string(), caps[2].trim().to_string()]);
    }

    let mut variants = vec![answer.to_string()];
    if let Some(caps) = PARENTHESIZED.captures(answer) {
        let before = caps[1].trim();
        let middle = caps[2].trim();
        let after = caps[3].trim();

        variants.push(join_parts(&[before, middle, after]));
        variants.push(before.to_string());
        variants.push(join_parts(&[before, after]));
    }

    dedup(variants)
}

fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first occurrence of each variant; drop blank derived variants.
fn dedup(variants: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(variants.len());
    for (i, variant) in variants.into_iter().enumerate() {
        if i > 0 && variant.trim().is_empty() {
            continue;
        }
        if !out.contains(&variant) {
            out.push(variant);
        }
    }
    out
}
