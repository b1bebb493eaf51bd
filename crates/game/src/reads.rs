//! Read-only game queries.

use quizpair_core::error::CoreError;
use quizpair_core::types::DbId;
use quizpair_db::repositories::{AnswerRepo, GameQuestionRepo, GameRepo, PlayerRepo};

use crate::error::GameResult;
use crate::service::GameService;
use crate::view::{GamePage, GameView};

/// Default page size for `my_games`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum page size for `my_games`.
pub const MAX_PAGE_LIMIT: i64 = 100;

impl GameService {
    /// The caller's pending or active game.
    pub async fn current_game(&self, user_id: &str) -> GameResult<GameView> {
        let game = GameRepo::find_unfinished_for_user(&self.pool, user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "current game",
                id: user_id.to_string(),
            })?;
        self.load_game_view(game.id).await
    }

    /// Any game by id, visible only to its participants.
    pub async fn game_by_id(&self, user_id: &str, game_id: DbId) -> GameResult<GameView> {
        let mut tx = quizpair_db::begin_snapshot(&self.pool).await?;
        let game = GameRepo::find_by_id(&mut *tx, game_id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "game",
                id: game_id.to_string(),
            })?;

        let players = PlayerRepo::list_by_game(&mut *tx, game.id).await?;
        if !players.iter().any(|p| p.user_id == user_id) {
            return Err(CoreError::Forbidden(format!(
                "user is not a participant of game {game_id}"
            ))
            .into());
        }

        let questions = GameQuestionRepo::list_by_game(&mut *tx, game.id).await?;
        let answers = AnswerRepo::list_by_game(&mut *tx, game.id).await?;
        tx.commit().await?;

        GameView::assemble(&game, &players, &questions, &answers)
    }

    /// The caller's games in any status, newest first.
    ///
    /// `limit` defaults to 10 and is capped at 100; negative offsets count
    /// as zero.
    pub async fn my_games(
        &self,
        user_id: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> GameResult<GamePage> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let mut tx = quizpair_db::begin_snapshot(&self.pool).await?;
        let total_count = GameRepo::count_for_user(&mut *tx, user_id).await?;
        let games = GameRepo::list_for_user(&mut *tx, user_id, limit, offset).await?;
        let ids: Vec<DbId> = games.iter().map(|g| g.id).collect();
        let players = PlayerRepo::list_by_games(&mut *tx, &ids).await?;
        let questions = GameQuestionRepo::list_by_games(&mut *tx, &ids).await?;
        let answers = AnswerRepo::list_by_games(&mut *tx, &ids).await?;
        tx.commit().await?;

        let items = games
            .iter()
            .map(|game| GameView::assemble(game, &players, &questions, &answers))
            .collect::<GameResult<Vec<_>>>()?;

        Ok(GamePage {
            items,
            total_count,
            limit,
            offset,
        })
    }

    /// Load the full view of one game from a consistent snapshot.
    pub(crate) async fn load_game_view(&self, game_id: DbId) -> GameResult<GameView> {
        let mut tx = quizpair_db::begin_snapshot(&self.pool).await?;
        let game = GameRepo::find_by_id(&mut *tx, game_id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "game",
                id: game_id.to_string(),
            })?;
        let players = PlayerRepo::list_by_game(&mut *tx, game_id).await?;
        let questions = GameQuestionRepo::list_by_game(&mut *tx, game_id).await?;
        let answers = AnswerRepo::list_by_game(&mut *tx, game_id).await?;
        tx.commit().await?;

        GameView::assemble(&game, &players, &questions, &answers)
    }
}
