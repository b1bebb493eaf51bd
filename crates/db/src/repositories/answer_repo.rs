//! Repository for the `answers` table.

use quizpair_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgExecutor};

use crate::models::answer::{Answer, AnswerRecord};

/// Column list for `answers` queries.
const COLUMNS: &str = "\
    id, game_question_id, player_id, body, is_correct, added_at, \
    created_at, updated_at";

/// Joined columns for [`AnswerRecord`].
const RECORD_COLUMNS: &str = "\
    a.id, gq.game_id, a.player_id, gq.question_id, gq.position, a.is_correct, a.added_at";

/// Unique constraint guarding one answer per player per question.
pub const UQ_ANSWER_PER_QUESTION: &str = "uq_answers_question_player";

/// Records and reads player answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert one answer.
    ///
    /// A second answer to the same question by the same player fails with a
    /// unique violation on [`UQ_ANSWER_PER_QUESTION`].
    pub async fn insert(
        conn: &mut PgConnection,
        game_question_id: DbId,
        player_id: DbId,
        body: &str,
        is_correct: bool,
        added_at: Timestamp,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (game_question_id, player_id, body, is_correct, added_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(game_question_id)
            .bind(player_id)
            .bind(body)
            .bind(is_correct)
            .bind(added_at)
            .fetch_one(conn)
            .await
    }

    /// Fill every unanswered question of a game with an empty, incorrect
    /// answer for `player_id`. Already answered questions are left alone.
    ///
    /// Returns the number of answers inserted.
    pub async fn fill_unanswered(
        conn: &mut PgConnection,
        game_id: DbId,
        player_id: DbId,
        added_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO answers (game_question_id, player_id, body, is_correct, added_at) \
             SELECT gq.id, $2, '', false, $3 \
             FROM game_questions gq \
             WHERE gq.game_id = $1 \
             ORDER BY gq.position \
             ON CONFLICT (game_question_id, player_id) DO NOTHING",
        )
        .bind(game_id)
        .bind(player_id)
        .bind(added_at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Whether the player already answered a game question.
    pub async fn exists<'e, E: PgExecutor<'e>>(
        executor: E,
        game_question_id: DbId,
        player_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS ( \
                 SELECT 1 FROM answers WHERE game_question_id = $1 AND player_id = $2 \
             )",
        )
        .bind(game_question_id)
        .bind(player_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Answers given in a game, oldest first.
    pub async fn list_by_game<'e, E: PgExecutor<'e>>(
        executor: E,
        game_id: DbId,
    ) -> Result<Vec<AnswerRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM answers a \
             JOIN game_questions gq ON gq.id = a.game_question_id \
             WHERE gq.game_id = $1 \
             ORDER BY a.added_at, gq.position, a.id"
        );
        sqlx::query_as::<_, AnswerRecord>(&query)
            .bind(game_id)
            .fetch_all(executor)
            .await
    }

    /// Answers given in several games, oldest first within each game.
    pub async fn list_by_games<'e, E: PgExecutor<'e>>(
        executor: E,
        game_ids: &[DbId],
    ) -> Result<Vec<AnswerRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM answers a \
             JOIN game_questions gq ON gq.id = a.game_question_id \
             WHERE gq.game_id = ANY($1) \
             ORDER BY gq.game_id, a.added_at, gq.position, a.id"
        );
        sqlx::query_as::<_, AnswerRecord>(&query)
            .bind(game_ids)
            .fetch_all(executor)
            .await
    }

    /// Number of answers a player has given.
    pub async fn count_for_player<'e, E: PgExecutor<'e>>(
        executor: E,
        player_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers WHERE player_id = $1")
            .bind(player_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
