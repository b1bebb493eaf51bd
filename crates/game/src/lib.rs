//! Pair-game engine: matchmaking, answer submission, timeout sweeping,
//! finalization and statistics on top of the `quizpair-db` repositories.
//!
//! Everything is reached through [`GameService`]; each operation runs in its
//! own database transaction and takes timestamps from the injected clock.

pub mod error;
mod finalizer;
mod matchmaking;
mod reads;
pub mod service;
mod statistics;
mod timeout;
mod turn;
pub mod view;

pub use error::{GameError, GameResult};
pub use service::GameService;
pub use timeout::SweepReport;
pub use view::{AnswerStatus, AnswerView, GamePage, GameView, PlayerProgress, QuestionView};
