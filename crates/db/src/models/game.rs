//! Pair game rows.

use quizpair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::status::{GameStatus, StatusId};

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub status_id: StatusId,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    /// First moment one of the two players answered their last question.
    pub any_player_finished_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Game {
    /// Typed status. The FK on `game_statuses` keeps `status_id` in range.
    pub fn status(&self) -> GameStatus {
        GameStatus::from_id(self.status_id).unwrap_or(GameStatus::PendingSecondPlayer)
    }

    pub fn is_active(&self) -> bool {
        self.status() == GameStatus::Active
    }

    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Finished
    }
}
