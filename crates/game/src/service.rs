use std::sync::Arc;

use quizpair_core::clock::{Clock, SystemClock};
use quizpair_core::rules::GameSettings;
use quizpair_core::types::Timestamp;
use quizpair_db::DbPool;

/// Entry point for every pair-game operation.
///
/// Cheap to clone; the HTTP layer and the timeout sweeper share one.
#[derive(Clone)]
pub struct GameService {
    pub(crate) pool: DbPool,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) settings: GameSettings,
}

impl GameService {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>, settings: GameSettings) -> Self {
        Self {
            pool,
            clock,
            settings,
        }
    }

    /// A service driven by the system clock.
    pub fn with_system_clock(pool: DbPool, settings: GameSettings) -> Self {
        Self::new(pool, Arc::new(SystemClock), settings)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub(crate) fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// `K` as the `i64` the repositories count with.
    pub(crate) fn questions_per_game(&self) -> i64 {
        i64::from(self.settings.questions_per_game)
    }
}
