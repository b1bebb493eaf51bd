//! Shared completion routine for games finished by the last answer or by
//! the timeout sweeper.

use quizpair_core::rules::GameSettings;
use quizpair_core::scoring::{fastest_player_bonus, BonusAward};
use quizpair_core::types::{DbId, Timestamp};
use quizpair_db::models::player::Player;
use quizpair_db::repositories::{GameRepo, PlayerRepo};
use sqlx::PgConnection;

use crate::error::{GameError, GameResult};
use crate::statistics::record_result;

/// Award the fastest-player bonus, finish the game and update both
/// players' statistics, all inside the caller's transaction.
///
/// The caller holds the game row lock. Finishing a game that is not active
/// is an internal error.
pub(crate) async fn finalize(
    conn: &mut PgConnection,
    game_id: DbId,
    settings: &GameSettings,
    now: Timestamp,
) -> GameResult<()> {
    let players = PlayerRepo::list_by_game(&mut *conn, game_id).await?;
    let [first, second] = players.as_slice() else {
        return Err(GameError::internal(format!(
            "game {game_id} has {} players, expected 2",
            players.len()
        )));
    };
    let (mut first, mut second): (Player, Player) = (first.clone(), second.clone());

    if settings.fastest_player_bonus > 0 {
        match fastest_player_bonus(first.finish_line(), second.finish_line()) {
            BonusAward::First => {
                first = PlayerRepo::add_bonus(&mut *conn, first.id, settings.fastest_player_bonus)
                    .await?;
            }
            BonusAward::Second => {
                second =
                    PlayerRepo::add_bonus(&mut *conn, second.id, settings.fastest_player_bonus)
                        .await?;
            }
            BonusAward::Nobody => {}
        }
    }

    if !GameRepo::finish(&mut *conn, game_id, now).await? {
        return Err(GameError::internal(format!("game {game_id} is not active")));
    }

    // Lock statistic rows in a stable order.
    let (a, b) = if first.user_id <= second.user_id {
        (&first, &second)
    } else {
        (&second, &first)
    };
    record_result(&mut *conn, &a.user_id, a.total_score(), b.total_score()).await?;
    record_result(&mut *conn, &b.user_id, b.total_score(), a.total_score()).await?;

    tracing::info!(
        game_id,
        first_user = %first.user_id,
        first_score = first.total_score(),
        second_user = %second.user_id,
        second_score = second.total_score(),
        "Game finished"
    );
    Ok(())
}
