//! Repository for the `game_questions` table.

use quizpair_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::game_question::{AssignedQuestion, GameQuestion};

/// Column list for `game_questions` queries.
const COLUMNS: &str = "id, game_id, question_id, position, created_at, updated_at";

/// Joined columns for [`AssignedQuestion`].
const ASSIGNED_COLUMNS: &str = "\
    gq.id, gq.game_id, gq.question_id, gq.position, q.body, q.correct_answers";

/// Binds questions to games and reads them back in position order.
pub struct GameQuestionRepo;

impl GameQuestionRepo {
    /// Bind `question_ids` to a game at positions `0..question_ids.len()`.
    pub async fn assign(
        conn: &mut PgConnection,
        game_id: DbId,
        question_ids: &[DbId],
    ) -> Result<Vec<GameQuestion>, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_questions (game_id, question_id, position) \
             SELECT $1, t.question_id, (t.ord - 1)::INTEGER \
             FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(question_id, ord) \
             ORDER BY t.ord \
             RETURNING {COLUMNS}"
        );
        let mut rows = sqlx::query_as::<_, GameQuestion>(&query)
            .bind(game_id)
            .bind(question_ids)
            .fetch_all(conn)
            .await?;
        rows.sort_by_key(|row| row.position);
        Ok(rows)
    }

    /// A game's questions with text and accepted answers, by position.
    pub async fn list_by_game<'e, E: PgExecutor<'e>>(
        executor: E,
        game_id: DbId,
    ) -> Result<Vec<AssignedQuestion>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSIGNED_COLUMNS} FROM game_questions gq \
             JOIN questions q ON q.id = gq.question_id \
             WHERE gq.game_id = $1 \
             ORDER BY gq.position"
        );
        sqlx::query_as::<_, AssignedQuestion>(&query)
            .bind(game_id)
            .fetch_all(executor)
            .await
    }

    /// Questions of several games, grouped by game then position.
    pub async fn list_by_games<'e, E: PgExecutor<'e>>(
        executor: E,
        game_ids: &[DbId],
    ) -> Result<Vec<AssignedQuestion>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSIGNED_COLUMNS} FROM game_questions gq \
             JOIN questions q ON q.id = gq.question_id \
             WHERE gq.game_id = ANY($1) \
             ORDER BY gq.game_id, gq.position"
        );
        sqlx::query_as::<_, AssignedQuestion>(&query)
            .bind(game_ids)
            .fetch_all(executor)
            .await
    }
}
