//! Question endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, PageQuery, QuestionsBody};
use crate::http::server::AppState;
use crate::models::{Question, QuestionsRequest};

/// Question list response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions_count: usize,
    /// id -> type
    pub categories: BTreeMap<i32, String>,
}

/// Delete response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// Create response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: Question,
}

/// GET /questions - one page of all questions plus the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state.store.questions().await?;

    let selected = page.slice(&questions);
    if selected.is_empty() {
        return Err(ApiError::bad_request(format!(
            "page {} is empty ({} questions)",
            page.number(),
            questions.len()
        )));
    }

    let categories = state
        .store
        .categories()
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: selected.to_vec(),
        total_questions_count: questions.len(),
        categories,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdParam(id): IdParam,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store.delete_question(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::from(e),
        other => ApiError::unprocessable(other),
    })?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions - search when the body has `search_term`, create otherwise.
///
/// Search answers with a bare array of matches, not an envelope.
async fn search_or_create(
    State(state): State<Arc<AppState>>,
    QuestionsBody(request): QuestionsBody,
) -> Result<Response, ApiError> {
    match request {
        QuestionsRequest::Search { search_term } => {
            let matches = state.store.search_questions(&search_term).await?;
            tracing::debug!(term = %search_term, count = matches.len(), "Search complete");
            Ok(Json(matches).into_response())
        }
        QuestionsRequest::Create(new_question) => {
            let created = state
                .store
                .insert_question(new_question)
                .await
                .map_err(ApiError::bad_request)?;

            Ok(Json(CreatedResponse {
                success: true,
                created,
            })
            .into_response())
        }
    }
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search_or_create))
        .route("/questions/{id}", delete(delete_question))
}
