use axum::Router;

use crate::{answer, state::ApiState};

/// V1 API routes
pub fn routes() -> Router<ApiState> {
    Router::new().merge(answer::routes())
}
