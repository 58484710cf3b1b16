use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest answer, in characters, accepted on either side.
pub const MAX_ANSWER_CHARS: usize = 500;
/// Highest value a clue may be worth.
pub const MAX_BASE_POINTS: i32 = 100_000;

/// Body of `POST /v1/answers/check`.
///
/// Missing or `null` answers are treated as empty strings.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CheckAnswerRequest {
    #[validate(length(max = 500, message = "user_answer is too long"))]
    pub user_answer: Option<String>,
    #[validate(length(max = 500, message = "correct_answer is too long"))]
    pub correct_answer: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 100_000, message = "base_points is out of range"))]
    pub base_points: i32,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub points: i32,
    /// Stage that accepted the answer, `null` when it was rejected.
    pub reason: Option<String>,
}
