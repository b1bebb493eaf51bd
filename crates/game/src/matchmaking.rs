//! Matchmaking: join the oldest waiting game or open a new one.

use quizpair_core::error::CoreError;
use quizpair_core::types::{DbId, Timestamp};
use quizpair_db::models::status::PlayerRole;
use quizpair_db::repositories::{GameQuestionRepo, GameRepo, PlayerRepo, QuestionRepo};
use sqlx::PgConnection;

use crate::error::{GameError, GameResult};
use crate::service::GameService;
use crate::view::GameView;

impl GameService {
    /// Put the user into a game.
    ///
    /// Joins the oldest pending game the user is not part of (skipping games
    /// another caller has locked) and starts it with `K` random questions,
    /// or opens a new pending game with the user as first player.
    pub async fn connect(&self, user_id: &str) -> GameResult<GameView> {
        let mut tx = self.pool.begin().await?;
        GameRepo::acquire_user_lock(&mut tx, user_id).await?;

        if GameRepo::find_unfinished_for_user(&mut *tx, user_id)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyInGame.into());
        }

        let now = self.now();
        let game_id = match self.join_pending(&mut tx, user_id, now).await? {
            Some(game_id) => game_id,
            None => self.open_pending(&mut tx, user_id, now).await?,
        };
        tx.commit().await?;

        self.load_game_view(game_id).await
    }

    /// Try to take the second seat of the oldest claimable pending game.
    /// Returns `None` when there is no game to join.
    async fn join_pending(
        &self,
        conn: &mut PgConnection,
        user_id: &str,
        now: Timestamp,
    ) -> GameResult<Option<DbId>> {
        let Some(game) = GameRepo::claim_oldest_pending(&mut *conn, user_id).await? else {
            return Ok(None);
        };

        match self.take_second_seat(&mut *conn, game.id, user_id).await {
            Ok(()) => {}
            Err(GameError::Core(CoreError::RaceLost { game_id })) => {
                // Someone else holds the seat unless it turns out to be us.
                let own = PlayerRepo::find_by_game_and_user(&mut *conn, game_id, user_id).await?;
                tracing::debug!(game_id, user_id, joined = own.is_some(), "Second seat race lost");
                return Ok(own.map(|p| p.game_id));
            }
            Err(e) => return Err(e),
        }

        let wanted = self.questions_per_game();
        let questions = QuestionRepo::random_published(&mut *conn, wanted).await?;
        if (questions.len() as i64) < wanted {
            return Err(CoreError::InsufficientQuestions {
                required: wanted,
                available: questions.len() as i64,
            }
            .into());
        }
        let question_ids: Vec<DbId> = questions.iter().map(|q| q.id).collect();
        GameQuestionRepo::assign(&mut *conn, game.id, &question_ids).await?;

        GameRepo::start(&mut *conn, game.id, now)
            .await?
            .ok_or_else(|| GameError::internal(format!("game {} left pending early", game.id)))?;

        tracing::info!(game_id = game.id, user_id, "Second player joined, game started");
        Ok(Some(game.id))
    }

    async fn take_second_seat(
        &self,
        conn: &mut PgConnection,
        game_id: DbId,
        user_id: &str,
    ) -> GameResult<()> {
        match PlayerRepo::create(conn, game_id, user_id, PlayerRole::Second).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::RaceLost { game_id }.into()),
        }
    }

    /// Open a new pending game with the user in the first seat.
    async fn open_pending(
        &self,
        conn: &mut PgConnection,
        user_id: &str,
        now: Timestamp,
    ) -> GameResult<DbId> {
        let game = GameRepo::create_pending(&mut *conn, now).await?;
        PlayerRepo::create(&mut *conn, game.id, user_id, PlayerRole::First)
            .await?
            .ok_or_else(|| GameError::internal(format!("first seat of new game {} taken", game.id)))?;

        tracing::info!(game_id = game.id, user_id, "Pending game created");
        Ok(game.id)
    }
}
