//! Handlers for the `/pair-game-quiz` resource.
//!
//! Every endpoint acts on behalf of the [`CurrentUser`].

use axum::extract::{Path, Query, State};
use axum::Json;
use quizpair_core::error::CoreError;
use quizpair_core::statistics::StatisticTally;
use quizpair_core::types::DbId;
use quizpair_game::{AnswerView, GamePage, GameView};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::CurrentUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum answer length, in characters, after trimming.
pub const MAX_ANSWER_LEN: usize = 500;

/// Body of `POST /pairs/my-current/answers`.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

/// Trim an answer and check it is 1..=500 characters long.
fn validate_answer(answer: &str) -> AppResult<&str> {
    let trimmed = answer.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_ANSWER_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "answer must be between 1 and {MAX_ANSWER_LEN} characters"
        ))));
    }
    Ok(trimmed)
}

// ---------------------------------------------------------------------------
// Matchmaking
// ---------------------------------------------------------------------------

/// POST /api/v1/pair-game-quiz/pairs/connection
///
/// Join the oldest waiting game or open a new one.
pub async fn connect(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<GameView>>> {
    let game = state.games.connect(&user.user_id).await?;
    tracing::info!(game_id = game.id, user_id = %user.user_id, status = game.status, "Connected");
    Ok(Json(DataResponse { data: game }))
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// POST /api/v1/pair-game-quiz/pairs/my-current/answers
pub async fn submit_answer(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitAnswerRequest>,
) -> AppResult<Json<DataResponse<AnswerView>>> {
    let answer = validate_answer(&input.answer)?;
    let view = state.games.submit_answer(&user.user_id, answer).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/pair-game-quiz/pairs/my-current
pub async fn current_game(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<GameView>>> {
    let game = state.games.current_game(&user.user_id).await?;
    Ok(Json(DataResponse { data: game }))
}

/// GET /api/v1/pair-game-quiz/pairs/{id}
///
/// 404 when the game does not exist, 403 when the caller did not play in it.
pub async fn game_by_id(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<Json<DataResponse<GameView>>> {
    let game = state.games.game_by_id(&user.user_id, game_id).await?;
    Ok(Json(DataResponse { data: game }))
}

/// GET /api/v1/pair-game-quiz/pairs/my
pub async fn my_games(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<GamePage>>> {
    let page = state
        .games
        .my_games(&user.user_id, params.limit, params.offset)
        .await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/pair-game-quiz/users/my-statistic
pub async fn my_statistic(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StatisticTally>>> {
    let statistic = state.games.statistic(&user.user_id).await?;
    Ok(Json(DataResponse { data: statistic }))
}
