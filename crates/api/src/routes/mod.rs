pub mod health;
pub mod pair_game;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /pair-game-quiz/pairs/connection            join or open a game (POST)
/// /pair-game-quiz/pairs/my-current            caller's unfinished game
/// /pair-game-quiz/pairs/my-current/answers    submit next answer (POST)
/// /pair-game-quiz/pairs/my                    caller's games, paginated
/// /pair-game-quiz/pairs/{id}                  one game (participants only)
/// /pair-game-quiz/users/my-statistic          caller's statistic
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pair-game-quiz", pair_game::router())
}
