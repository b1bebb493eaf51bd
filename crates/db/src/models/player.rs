//! Player rows: one user's seat in one game.

use quizpair_core::scoring::FinishLine;
use quizpair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::status::{PlayerRole, StatusId};

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub game_id: DbId,
    pub user_id: String,
    pub role_id: StatusId,
    pub score: i32,
    pub bonus: i32,
    /// Set when the player answers their last question or is timed out.
    pub finished_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Player {
    pub fn role(&self) -> PlayerRole {
        PlayerRole::from_id(self.role_id).unwrap_or(PlayerRole::First)
    }

    pub fn has_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Score including the fastest-player bonus.
    pub fn total_score(&self) -> i32 {
        self.score + self.bonus
    }

    /// Inputs to the fastest-player bonus rule.
    pub fn finish_line(&self) -> FinishLine {
        FinishLine {
            finished_at: self.finished_at,
            score: self.score,
        }
    }
}
