use quizpair_core::error::CoreError;

/// Error type for game engine operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// Shorthand for an internal invariant breach.
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        GameError::Core(CoreError::Internal(message.into()))
    }
}
