//! Storage trait shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Persistent question and category storage.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, by id.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// A single category, or `DbError::NotFound`.
    async fn category(&self, id: i32) -> Result<Category, DbError>;

    /// All questions, by id.
    async fn questions(&self) -> Result<Vec<Question>, DbError>;

    /// Questions belonging to one category, by id.
    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Persist a new question and return it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Delete a question, or `DbError::NotFound` if no row matched.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;

    /// First question (lowest id) in `category` whose id is not in `exclude`.
    async fn next_quiz_question(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> Result<Option<Question>, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("question", 42);
        assert_eq!(err.to_string(), "not found: question '42'");
    }
}
