//! Repository for the `questions` table.

use sqlx::PgExecutor;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, body, correct_answers, published, created_at, updated_at";

/// Read access to the question source, plus inserts for seeding.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (body, correct_answers, published) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.body)
            .bind(&input.correct_answers)
            .bind(input.published)
            .fetch_one(executor)
            .await
    }

    /// Up to `count` distinct published questions in random order.
    pub async fn random_published<'e, E: PgExecutor<'e>>(
        executor: E,
        count: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE published ORDER BY random() LIMIT $1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(count)
            .fetch_all(executor)
            .await
    }

    /// Number of published questions.
    pub async fn count_published<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE published")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
