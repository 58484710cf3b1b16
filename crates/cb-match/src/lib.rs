//! Answer equivalence engine for Clueboard
//!
//! This crate decides whether a player's typed answer should count as the
//! canonical answer of a clue. It is lenient on casing, accents, punctuation,
//! spelling variants that sound alike, small typos, the order of items in a
//! list, alternate names given in parentheses, number words and common
//! inflections, while refusing answers that only rearrange the letters of the
//! correct one.
//!
//! Everything here is a pure, synchronous function over `&str`. Lookup tables
//! are built once on first use and shared read-only across threads.
//!
//! ```
//! use cb_match::{calculate_points, check_answer};
//!
//! assert!(check_answer("the eiffel tower", "Eiffel Tower"));
//! assert!(!check_answer("god", "dog"));
//! assert_eq!(calculate_points("fone", "phone", 600), 600);
//! ```

pub mod anagram;
pub mod equivalents;
pub mod list;
pub mod matcher;
pub mod normalize;
pub mod numbers;
pub mod parenthetical;
pub mod phonetic;
pub mod similarity;
pub mod words;

pub use matcher::{MatchReason, calculate_points, check_answer, explain_answer};
pub use normalize::{compress, normalize};
pub use phonetic::PhoneticCode;
