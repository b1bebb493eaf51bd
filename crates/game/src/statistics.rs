//! Per-user statistics: written by the finalizer, read on demand.

use quizpair_core::statistics::StatisticTally;
use quizpair_db::models::user_statistic::UserStatistic;
use quizpair_db::repositories::UserStatisticRepo;
use sqlx::PgConnection;

use crate::error::GameResult;
use crate::service::GameService;

/// Fold one finished game into a user's statistic row, creating it first if
/// needed. Must run inside the finalizing transaction.
pub(crate) async fn record_result(
    conn: &mut PgConnection,
    user_id: &str,
    own_score: i32,
    opponent_score: i32,
) -> GameResult<UserStatistic> {
    let row = UserStatisticRepo::lock_or_create(&mut *conn, user_id).await?;
    let mut tally = row.tally();
    tally.record(own_score, opponent_score);
    Ok(UserStatisticRepo::save(conn, user_id, &tally).await?)
}

impl GameService {
    /// Cumulative statistic of a user; all zeros before their first
    /// finished game.
    pub async fn statistic(&self, user_id: &str) -> GameResult<StatisticTally> {
        let row = UserStatisticRepo::find_by_user(&self.pool, user_id).await?;
        Ok(row.map(|r| r.tally()).unwrap_or_default())
    }
}
