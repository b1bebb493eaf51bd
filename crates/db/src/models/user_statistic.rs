//! Cumulative per-user statistics.

use quizpair_core::statistics::StatisticTally;
use quizpair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_statistics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserStatistic {
    pub id: DbId,
    pub user_id: String,
    pub sum_score: i64,
    pub games_count: i32,
    pub wins_count: i32,
    pub losses_count: i32,
    pub draws_count: i32,
    pub avg_score: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserStatistic {
    pub fn tally(&self) -> StatisticTally {
        StatisticTally {
            sum_score: self.sum_score,
            avg_score: self.avg_score,
            games_count: self.games_count,
            wins_count: self.wins_count,
            losses_count: self.losses_count,
            draws_count: self.draws_count,
        }
    }
}
