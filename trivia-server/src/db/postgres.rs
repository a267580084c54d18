//! PostgreSQL-backed store
//!
//! Every call is a single statement against the pool:
//! - lists: ORDER BY id, paginated by the caller
//! - search: ILIKE with wildcards in the term escaped
//! - delete: DELETE ... RETURNING, so "no row" and "failed" stay distinct

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use super::{DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Store backed by a sqlx `PgPool`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category(&self, id: i32) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        tracing::debug!(term, "Searching questions");
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE question ILIKE '%' || $1 || '%' ESCAPE '\\' \
             ORDER BY id"
        ))
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let created = sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        tracing::info!(id = created.id, category = created.category, "Question created");
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?;

        match deleted {
            Some(_) => {
                tracing::info!(id, "Question deleted");
                Ok(())
            }
            None => Err(DbError::not_found("question", id)),
        }
    }

    async fn next_quiz_question(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> Result<Option<Question>, DbError> {
        let row = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE category = $1 AND id <> ALL($2) \
             ORDER BY id LIMIT 1"
        ))
        .bind(category)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

/// Split constraint violations out of generic database failures.
fn classify(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if !matches!(db_err.kind(), ErrorKind::Other) {
            return DbError::Constraint(db_err.message().to_owned());
        }
    }
    DbError::Sqlx(err)
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, seed, DEFAULT_MAX_CONNECTIONS};

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("hi"), "hi");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn seeded_store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        seed::run(&pool).await.expect("seed failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_seeded_categories() {
        let store = seeded_store().await;
        let categories = store.categories().await.unwrap();
        assert!(categories.len() >= 6);
        assert_eq!(store.category(1).await.unwrap().kind, "Science");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete() {
        let store = seeded_store().await;
        let created = store
            .insert_question(NewQuestion {
                question: "Integration question?".into(),
                answer: "Yes".into(),
                category: 1,
                difficulty: 1,
            })
            .await
            .unwrap();

        store.delete_question(created.id).await.unwrap();
        let err = store.delete_question(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn quiz_skips_previous_questions() {
        let store = seeded_store().await;
        let next = store.next_quiz_question(2, &[16]).await.unwrap();
        if let Some(q) = next {
            assert_ne!(q.id, 16);
            assert_eq!(q.category, 2);
        }
    }
}
