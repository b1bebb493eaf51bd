//! Repository for the `user_statistics` table.

use quizpair_core::statistics::StatisticTally;
use sqlx::{PgConnection, PgExecutor};

use crate::models::user_statistic::UserStatistic;

/// Column list for `user_statistics` queries.
const COLUMNS: &str = "\
    id, user_id, sum_score, games_count, wins_count, losses_count, draws_count, \
    avg_score, created_at, updated_at";

/// Reads and updates cumulative user statistics.
pub struct UserStatisticRepo;

impl UserStatisticRepo {
    /// Find a user's statistic row.
    pub async fn find_by_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
    ) -> Result<Option<UserStatistic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_statistics WHERE user_id = $1");
        sqlx::query_as::<_, UserStatistic>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }

    /// Ensure a row exists for the user and lock it for the transaction.
    ///
    /// Concurrent finalizations touching the same user serialize on this
    /// lock, so read-modify-write updates never lose a game.
    pub async fn lock_or_create(
        conn: &mut PgConnection,
        user_id: &str,
    ) -> Result<UserStatistic, sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_statistics (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM user_statistics WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, UserStatistic>(&query)
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Overwrite a user's totals.
    pub async fn save(
        conn: &mut PgConnection,
        user_id: &str,
        tally: &StatisticTally,
    ) -> Result<UserStatistic, sqlx::Error> {
        let query = format!(
            "UPDATE user_statistics \
             SET sum_score = $2, games_count = $3, wins_count = $4, \
                 losses_count = $5, draws_count = $6, avg_score = $7 \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserStatistic>(&query)
            .bind(user_id)
            .bind(tally.sum_score)
            .bind(tally.games_count)
            .bind(tally.wins_count)
            .bind(tally.losses_count)
            .bind(tally.draws_count)
            .bind(tally.avg_score)
            .fetch_one(conn)
            .await
    }
}
