//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, PageQuery};
use crate::http::server::AppState;
use crate::models::{Category, Question};

/// Category list response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

/// Questions-in-category response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
///
/// Unlike `GET /questions`, a page past the end is an empty list, not an error.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    IdParam(id): IdParam,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state.store.category(id).await?;
    let questions = state.store.questions_in_category(category.id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
