//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::QuizBody;
use crate::http::server::AppState;
use crate::models::Question;

/// Next quiz question; `null` when the category is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quiz - first remaining question in the category, by id.
///
/// Selection is deterministic, not random.
async fn next_question(
    State(state): State<Arc<AppState>>,
    QuizBody(request): QuizBody,
) -> Result<Json<QuizResponse>, ApiError> {
    let question = state
        .store
        .next_quiz_question(request.category, &request.previous_questions)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quiz", post(next_question))
}
