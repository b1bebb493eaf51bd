//! Forced completion of games stalled after one player finished.

use quizpair_core::types::DbId;
use quizpair_db::repositories::{AnswerRepo, GameRepo, PlayerRepo};
use serde::Serialize;

use crate::error::GameResult;
use crate::finalizer::finalize;
use crate::service::GameService;

/// Maximum number of games examined per sweep.
const SWEEP_BATCH_LIMIT: i64 = 100;

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Games that matched the timeout query.
    pub examined: usize,
    /// Games force-finished by this sweep.
    pub finished: usize,
    /// Games whose transaction failed; retried next sweep.
    pub failed: usize,
}

impl GameService {
    /// Force-finish every active game whose first finisher crossed the line
    /// more than the grace window ago while the other player is still
    /// answering.
    ///
    /// Each game runs in its own transaction. Per-game failures are logged
    /// and counted, never returned.
    pub async fn sweep_timeouts(&self) -> GameResult<SweepReport> {
        let cutoff = self.now() - self.settings.timeout_grace_chrono();
        let candidates = GameRepo::find_timed_out(&self.pool, cutoff, SWEEP_BATCH_LIMIT).await?;

        let mut report = SweepReport {
            examined: candidates.len(),
            ..SweepReport::default()
        };
        for game_id in candidates {
            match self.force_finish(game_id).await {
                Ok(true) => report.finished += 1,
                Ok(false) => {}
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(game_id, error = %e, "Failed to force-finish timed out game");
                }
            }
        }

        if report.examined > 0 {
            tracing::info!(
                examined = report.examined,
                finished = report.finished,
                failed = report.failed,
                "Timeout sweep complete"
            );
        }
        Ok(report)
    }

    /// Finish one stalled game. Returns `false` when it no longer qualifies.
    async fn force_finish(&self, game_id: DbId) -> GameResult<bool> {
        let mut tx = self.pool.begin().await?;

        let Some(game) = GameRepo::lock_for_update(&mut tx, game_id).await? else {
            return Ok(false);
        };
        if !game.is_active() {
            return Ok(false);
        }

        let players = PlayerRepo::list_by_game(&mut *tx, game_id).await?;
        let Some(laggard) = players.iter().find(|p| !p.has_finished()) else {
            return Ok(false);
        };
        let answered = AnswerRepo::count_for_player(&mut *tx, laggard.id).await?;
        if answered >= self.questions_per_game() {
            tracing::warn!(game_id, player_id = laggard.id, "Unfinished player has every answer");
            return Ok(false);
        }

        let now = self.now();
        let filled = AnswerRepo::fill_unanswered(&mut tx, game_id, laggard.id, now).await?;
        PlayerRepo::mark_finished(&mut tx, laggard.id, now).await?;
        finalize(&mut tx, game_id, &self.settings, now).await?;
        tx.commit().await?;

        tracing::info!(
            game_id,
            player_id = laggard.id,
            synthetic_answers = filled,
            "Timed out game force-finished"
        );
        Ok(true)
    }
}
