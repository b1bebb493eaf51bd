//! Repository for the `players` table.

use quizpair_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgExecutor};

use crate::models::player::Player;
use crate::models::status::PlayerRole;

/// Column list for `players` queries.
const COLUMNS: &str = "\
    id, game_id, user_id, role_id, score, bonus, finished_at, \
    created_at, updated_at";

/// Provides seat and score operations for game players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Seat a user in a game.
    ///
    /// Returns `None` when the seat (or the user's place in this game) is
    /// already taken; `uq_players_game_role` / `uq_players_game_user`
    /// resolve the race.
    pub async fn create(
        conn: &mut PgConnection,
        game_id: DbId,
        user_id: &str,
        role: PlayerRole,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (game_id, user_id, role_id) VALUES ($1, $2, $3) \
             ON CONFLICT DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(game_id)
            .bind(user_id)
            .bind(role.id())
            .fetch_optional(conn)
            .await
    }

    /// Find a user's seat in a specific game.
    pub async fn find_by_game_and_user<'e, E: PgExecutor<'e>>(
        executor: E,
        game_id: DbId,
        user_id: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE game_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Player>(&query)
            .bind(game_id)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }

    /// Both players of a game, first seat first.
    pub async fn list_by_game<'e, E: PgExecutor<'e>>(
        executor: E,
        game_id: DbId,
    ) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE game_id = $1 ORDER BY role_id");
        sqlx::query_as::<_, Player>(&query)
            .bind(game_id)
            .fetch_all(executor)
            .await
    }

    /// Players of several games, grouped by game then seat.
    pub async fn list_by_games<'e, E: PgExecutor<'e>>(
        executor: E,
        game_ids: &[DbId],
    ) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players WHERE game_id = ANY($1) ORDER BY game_id, role_id"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(game_ids)
            .fetch_all(executor)
            .await
    }

    /// Apply one answered question to a player's row.
    ///
    /// Adds a point when `correct`, and stamps `finished_at` when
    /// `finished_at` is given and the player has not finished yet.
    pub async fn record_answer(
        conn: &mut PgConnection,
        player_id: DbId,
        correct: bool,
        finished_at: Option<Timestamp>,
    ) -> Result<Player, sqlx::Error> {
        let query = format!(
            "UPDATE players \
             SET score = score + CASE WHEN $2 THEN 1 ELSE 0 END, \
                 finished_at = COALESCE(finished_at, $3) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(player_id)
            .bind(correct)
            .bind(finished_at)
            .fetch_one(conn)
            .await
    }

    /// Stamp `finished_at` on a player who has not finished.
    pub async fn mark_finished(
        conn: &mut PgConnection,
        player_id: DbId,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE players SET finished_at = $2 WHERE id = $1 AND finished_at IS NULL",
        )
        .bind(player_id)
        .bind(at)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add the fastest-player bonus to a player.
    pub async fn add_bonus(
        conn: &mut PgConnection,
        player_id: DbId,
        bonus: i32,
    ) -> Result<Player, sqlx::Error> {
        let query = format!(
            "UPDATE players SET bonus = bonus + $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(player_id)
            .bind(bonus)
            .fetch_one(conn)
            .await
    }
}
