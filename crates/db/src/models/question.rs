//! Question source rows.

use quizpair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub body: String,
    pub correct_answers: Vec<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub body: String,
    pub correct_answers: Vec<String>,
    pub published: bool,
}
