//! Questions bound to a game at a fixed position.

use quizpair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameQuestion {
    pub id: DbId,
    pub game_id: DbId,
    pub question_id: DbId,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A game question joined with its source question text and answers.
#[derive(Debug, Clone, FromRow)]
pub struct AssignedQuestion {
    /// `game_questions.id`.
    pub id: DbId,
    pub game_id: DbId,
    pub question_id: DbId,
    pub position: i32,
    pub body: String,
    pub correct_answers: Vec<String>,
}
