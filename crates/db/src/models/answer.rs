//! Answer rows.

use quizpair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub game_question_id: DbId,
    pub player_id: DbId,
    pub body: String,
    pub is_correct: bool,
    pub added_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An answer joined with the question it belongs to, for game views.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRecord {
    pub id: DbId,
    pub game_id: DbId,
    pub player_id: DbId,
    /// Source `questions.id` (not the game question row).
    pub question_id: DbId,
    pub position: i32,
    pub is_correct: bool,
    pub added_at: Timestamp,
}
