//! In-memory store for tests and local demos
//!
//! Rows live in id order behind a single lock. Ids come from a counter
//! that only moves forward, so deleted ids are never handed out again.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{seed, DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

#[derive(Debug)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// Store that keeps everything in process memory.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map_or(1, |q| q.id + 1);
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// A store holding the reference dataset.
    pub fn seeded() -> Self {
        Self::new(seed::categories(), seed::questions())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        self.tables
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        Ok(self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id = id
            .checked_add(1)
            .ok_or_else(|| DbError::Constraint("question id sequence exhausted".into()))?;

        let created = question.with_id(id);
        tables.questions.push(created.clone());
        tracing::info!(id, category = created.category, "Question created");
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| DbError::not_found("question", id))?;
        tables.questions.remove(index);
        tracing::info!(id, "Question deleted");
        Ok(())
    }

    async fn next_quiz_question(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> Result<Option<Question>, DbError> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .iter()
            .find(|q| q.category == category && !exclude.contains(&q.id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(category: i32) -> NewQuestion {
        NewQuestion {
            question: "What is the capital of Peru?".into(),
            answer: "Lima".into(),
            category,
            difficulty: 2,
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryStore::seeded();
        let first = store.insert_question(new_question(3)).await.unwrap();
        store.delete_question(first.id).await.unwrap();
        let second = store.insert_question(new_question(3)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = MemoryStore::default();
        let created = store.insert_question(new_question(1)).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::seeded();
        let err = store.delete_question(1000).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::seeded();
        let upper = store.search_questions("WHAT").await.unwrap();
        let lower = store.search_questions("what").await.unwrap();
        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn quiz_takes_lowest_remaining_id() {
        let store = MemoryStore::seeded();
        let first = store.next_quiz_question(2, &[]).await.unwrap().unwrap();
        assert_eq!(first.id, 16);

        let next = store.next_quiz_question(2, &[16]).await.unwrap().unwrap();
        assert_eq!(next.id, 17);

        let none = store
            .next_quiz_question(2, &[16, 17, 18, 19])
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn unknown_category() {
        let store = MemoryStore::seeded();
        assert!(matches!(
            store.category(100).await,
            Err(DbError::NotFound { resource: "category", .. })
        ));
        assert!(store.questions_in_category(100).await.unwrap().is_empty());
    }
}
