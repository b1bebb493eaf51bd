//! Periodic force-finish of games whose second player ran out of time.
//!
//! Every tick asks the game service for active games where one player
//! finished more than the grace window ago and the other has not, and
//! finishes them.

use std::time::Duration;

use quizpair_game::GameService;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Run the timeout sweep loop until `cancel` is triggered.
pub async fn run(games: GameService, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_ms = interval.as_millis() as u64,
        grace_secs = games.settings().timeout_grace.as_secs(),
        "Timeout sweeper started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Timeout sweeper stopping");
                break;
            }
            _ = ticker.tick() => {
                match games.sweep_timeouts().await {
                    Ok(report) => {
                        tracing::debug!(
                            examined = report.examined,
                            finished = report.finished,
                            "Timeout sweep tick"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Timeout sweep failed");
                    }
                }
            }
        }
    }
}
