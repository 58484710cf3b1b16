use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use validator::Validate;

use super::model::{CheckAnswerRequest, CheckAnswerResponse};
use crate::{
    error::ApiError, metrics::record_answer_check, middleware::rate_limit, state::ApiState,
};

pub fn routes() -> Router<ApiState> {
    rate_limit::apply_answer_rate_limit(
        Router::new().route("/v1/answers/check", post(check_answer)),
    )
}

/// Check a typed answer against the canonical one and award points.
async fn check_answer(
    payload: Result<Json<CheckAnswerRequest>, JsonRejection>,
) -> Result<Json<CheckAnswerResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user_answer = payload.user_answer.unwrap_or_default();
    let correct_answer = payload.correct_answer.unwrap_or_default();
    let base_points = payload.base_points;

    let reason = tokio::task::spawn_blocking(move || {
        cb_match::explain_answer(&user_answer, &correct_answer)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Answer check failed: {e}")))?;

    let correct = reason.is_some();
    let points = if correct { base_points } else { 0 };

    record_answer_check(reason);
    tracing::debug!(
        correct,
        points,
        reason = reason.map(cb_match::MatchReason::as_str),
        "answer checked"
    );

    Ok(Json(CheckAnswerResponse {
        correct,
        points,
        reason: reason.map(|r| r.to_string()),
    }))
}
