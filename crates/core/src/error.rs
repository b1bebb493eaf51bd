use crate::types::DbId;

/// Domain errors raised by matchmaking, answer submission and the read
/// operations around them.
///
/// Every variant except [`CoreError::RaceLost`] and [`CoreError::Internal`] is
/// an expected outcome that is surfaced verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Current user is already participating in an active pair")]
    AlreadyInGame,

    #[error("Not enough published questions: need {required}, found {available}")]
    InsufficientQuestions { required: i64, available: i64 },

    #[error(
        "Current user is not inside an active pair or has already answered all questions"
    )]
    NotInActiveGame,

    #[error("Answer already submitted for this question")]
    DuplicateAnswer,

    #[error("Next question not found in game {game_id}")]
    QuestionNotFound { game_id: DbId },

    /// A concurrent transaction claimed the same slot first. Resolved inside
    /// matchmaking by re-reading state; never returned to callers.
    #[error("Lost a concurrent race for game {game_id}")]
    RaceLost { game_id: DbId },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
