mod model;
mod routes;

pub use model::{CheckAnswerRequest, CheckAnswerResponse, MAX_ANSWER_CHARS, MAX_BASE_POINTS};
pub use routes::routes;
