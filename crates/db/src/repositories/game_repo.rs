//! Repository for the `games` table.
//!
//! Status transitions are guarded in SQL (`WHERE status_id = ...`) so a
//! transition applied twice reports `false` instead of rewinding state.

use quizpair_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgExecutor};

use crate::models::game::Game;
use crate::models::status::GameStatus;

/// Column list for `games` queries.
const COLUMNS: &str = "\
    id, status_id, started_at, finished_at, any_player_finished_at, \
    created_at, updated_at";

/// Same columns qualified with the `g` alias for joins.
const G_COLUMNS: &str = "\
    g.id, g.status_id, g.started_at, g.finished_at, g.any_player_finished_at, \
    g.created_at, g.updated_at";

/// Provides lifecycle operations for pair games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game waiting for its second player.
    pub async fn create_pending(
        conn: &mut PgConnection,
        created_at: Timestamp,
    ) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (status_id, created_at) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(GameStatus::PendingSecondPlayer.id())
            .bind(created_at)
            .fetch_one(conn)
            .await
    }

    /// Serialize matchmaking for one user until the transaction ends.
    ///
    /// Takes a transaction-scoped advisory lock keyed on the user id, so a
    /// user's concurrent connect calls run one after another.
    pub async fn acquire_user_lock(
        conn: &mut PgConnection,
        user_id: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(user_id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Find a game by its ID.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// The pending or active game the user currently sits in, if any.
    pub async fn find_unfinished_for_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {G_COLUMNS} FROM games g \
             JOIN players p ON p.game_id = g.id \
             WHERE p.user_id = $1 AND g.status_id IN ($2, $3) \
             ORDER BY g.created_at DESC, g.id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(user_id)
            .bind(GameStatus::PendingSecondPlayer.id())
            .bind(GameStatus::Active.id())
            .fetch_optional(executor)
            .await
    }

    /// Lock the oldest pending game the user is not already part of.
    ///
    /// Uses `FOR UPDATE SKIP LOCKED` so concurrent joiners never block on,
    /// or both claim, the same pending game.
    pub async fn claim_oldest_pending(
        conn: &mut PgConnection,
        user_id: &str,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM games g \
             WHERE g.status_id = $1 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM players p WHERE p.game_id = g.id AND p.user_id = $2 \
               ) \
             ORDER BY g.created_at ASC, g.id ASC \
             LIMIT 1 \
             FOR UPDATE SKIP LOCKED"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(GameStatus::PendingSecondPlayer.id())
            .bind(user_id)
            .fetch_optional(conn)
            .await
    }

    /// Lock a game row for the rest of the transaction, waiting if needed.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Move a pending game to active. Returns `None` if it was not pending.
    pub async fn start(
        conn: &mut PgConnection,
        id: DbId,
        started_at: Timestamp,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET status_id = $2, started_at = $3 \
             WHERE id = $1 AND status_id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(GameStatus::Active.id())
            .bind(started_at)
            .bind(GameStatus::PendingSecondPlayer.id())
            .fetch_optional(conn)
            .await
    }

    /// Stamp the first-finisher time. Never overwrites an existing stamp.
    pub async fn mark_any_player_finished(
        conn: &mut PgConnection,
        id: DbId,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE games SET any_player_finished_at = $2 \
             WHERE id = $1 AND status_id = $3 AND any_player_finished_at IS NULL",
        )
        .bind(id)
        .bind(at)
        .bind(GameStatus::Active.id())
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move an active game to finished. Returns `false` if it was not active.
    pub async fn finish(
        conn: &mut PgConnection,
        id: DbId,
        finished_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE games SET status_id = $2, finished_at = $3 \
             WHERE id = $1 AND status_id = $4",
        )
        .bind(id)
        .bind(GameStatus::Finished.id())
        .bind(finished_at)
        .bind(GameStatus::Active.id())
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// IDs of active games whose first finisher crossed the line before
    /// `cutoff` while the other player is still answering.
    pub async fn find_timed_out<'e, E: PgExecutor<'e>>(
        executor: E,
        cutoff: Timestamp,
        limit: i64,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT g.id FROM games g \
             WHERE g.status_id = $1 \
               AND g.any_player_finished_at IS NOT NULL \
               AND g.any_player_finished_at < $2 \
               AND EXISTS ( \
                   SELECT 1 FROM players p \
                   WHERE p.game_id = g.id AND p.finished_at IS NOT NULL \
               ) \
               AND EXISTS ( \
                   SELECT 1 FROM players p \
                   WHERE p.game_id = g.id AND p.finished_at IS NULL \
               ) \
             ORDER BY g.any_player_finished_at ASC, g.id ASC \
             LIMIT $3",
        )
        .bind(GameStatus::Active.id())
        .bind(cutoff)
        .bind(limit)
        .fetch_all(executor)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Games the user took part in, newest first.
    pub async fn list_for_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {G_COLUMNS} FROM games g \
             JOIN players p ON p.game_id = g.id \
             WHERE p.user_id = $1 \
             ORDER BY g.created_at DESC, g.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await
    }

    /// Number of games the user took part in.
    pub async fn count_for_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM players WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?;
        Ok(count)
    }
}
