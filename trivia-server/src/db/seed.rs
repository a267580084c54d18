//! Reference dataset: six categories and the starter question set

use sqlx::PgPool;

use super::DbError;
use crate::models::{Category, Question};

/// (id, type)
pub const CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (id, question, answer, difficulty, category)
pub const QUESTIONS: &[(i32, &str, &str, i32, i32)] = &[
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 4, 1),
    (21, "Who discovered penicillin?", "Alexander Fleming", 3, 1),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, kind)| Category::new(id, kind))
        .collect()
}

pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, question, answer, difficulty, category)| Question {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
        .collect()
}

/// Load the reference dataset into empty tables.
///
/// Tables that already hold rows are left alone. Sequences are advanced
/// past the seeded ids so later inserts don't collide.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    let (category_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if category_count == 0 {
        for category in categories() {
            sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
                .bind(category.id)
                .bind(&category.kind)
                .execute(&mut *tx)
                .await?;
        }
        tracing::info!(count = CATEGORIES.len(), "Seeded categories");
    }

    let (question_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;
    if question_count == 0 {
        for q in questions() {
            sqlx::query(
                "INSERT INTO questions (id, question, answer, category, difficulty) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(q.id)
            .bind(&q.question)
            .bind(&q.answer)
            .bind(q.category)
            .bind(q.difficulty)
            .execute(&mut *tx)
            .await?;
        }
        tracing::info!(count = QUESTIONS.len(), "Seeded questions");
    }

    for table in ["categories", "questions"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
