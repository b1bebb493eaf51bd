//! Route definitions for the `/pair-game-quiz` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pair_game;
use crate::state::AppState;

/// Routes mounted at `/pair-game-quiz`.
///
/// ```text
/// POST   /pairs/connection          -> connect
/// GET    /pairs/my-current          -> current_game
/// POST   /pairs/my-current/answers  -> submit_answer
/// GET    /pairs/my                  -> my_games
/// GET    /pairs/{id}                -> game_by_id
/// GET    /users/my-statistic        -> my_statistic
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pairs/connection", post(pair_game::connect))
        .route("/pairs/my-current", get(pair_game::current_game))
        .route("/pairs/my-current/answers", post(pair_game::submit_answer))
        .route("/pairs/my", get(pair_game::my_games))
        .route("/pairs/{id}", get(pair_game::game_by_id))
        .route("/users/my-statistic", get(pair_game::my_statistic))
}
