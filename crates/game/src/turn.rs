//! Answer submission for the caller's active game.

use quizpair_core::error::CoreError;
use quizpair_core::scoring::is_answer_correct;
use quizpair_db::repositories::answer_repo::UQ_ANSWER_PER_QUESTION;
use quizpair_db::repositories::{AnswerRepo, GameQuestionRepo, GameRepo, PlayerRepo};

use crate::error::{GameError, GameResult};
use crate::finalizer::finalize;
use crate::service::GameService;
use crate::view::AnswerView;

impl GameService {
    /// Record the caller's answer to their next unanswered question.
    ///
    /// The caller's progress is read first, then the game row is locked so
    /// the two players of a game are processed one at a time. A second
    /// submission that raced for the same question fails with
    /// `DuplicateAnswer`.
    pub async fn submit_answer(&self, user_id: &str, text: &str) -> GameResult<AnswerView> {
        let mut tx = self.pool.begin().await?;

        let game = GameRepo::find_unfinished_for_user(&mut *tx, user_id)
            .await?
            .ok_or(CoreError::NotInActiveGame)?;
        let player = PlayerRepo::find_by_game_and_user(&mut *tx, game.id, user_id)
            .await?
            .ok_or(CoreError::NotInActiveGame)?;
        // Counted before the lock on purpose; the `exists` check below
        // catches a racing submission for the same slot.
        let answered = AnswerRepo::count_for_player(&mut *tx, player.id).await?;

        let game = GameRepo::lock_for_update(&mut tx, game.id)
            .await?
            .ok_or(CoreError::NotInActiveGame)?;
        if !game.is_active() {
            return Err(CoreError::NotInActiveGame.into());
        }
        if answered >= self.questions_per_game() {
            return Err(CoreError::NotInActiveGame.into());
        }

        let questions = GameQuestionRepo::list_by_game(&mut *tx, game.id).await?;
        let slot = questions
            .iter()
            .find(|q| i64::from(q.position) == answered)
            .ok_or(CoreError::QuestionNotFound { game_id: game.id })?;

        if AnswerRepo::exists(&mut *tx, slot.id, player.id).await? {
            return Err(CoreError::DuplicateAnswer.into());
        }

        let now = self.now();
        let is_correct = is_answer_correct(text, &slot.correct_answers);
        let answer = AnswerRepo::insert(&mut tx, slot.id, player.id, text, is_correct, now)
            .await
            .map_err(|e| {
                if quizpair_db::is_unique_violation(&e, UQ_ANSWER_PER_QUESTION) {
                    CoreError::DuplicateAnswer.into()
                } else {
                    GameError::from(e)
                }
            })?;

        let is_last = slot.position == self.settings.last_position();
        let player =
            PlayerRepo::record_answer(&mut tx, player.id, is_correct, is_last.then_some(now))
                .await?;
        tracing::debug!(
            game_id = game.id,
            player_id = player.id,
            position = slot.position,
            is_correct,
            "Answer recorded"
        );

        if is_last {
            tracing::info!(game_id = game.id, player_id = player.id, "Player finished");
            let players = PlayerRepo::list_by_game(&mut *tx, game.id).await?;
            let everyone_finished = players.len() == 2 && players.iter().all(|p| p.has_finished());
            if everyone_finished {
                finalize(&mut tx, game.id, &self.settings, now).await?;
            } else {
                GameRepo::mark_any_player_finished(&mut tx, game.id, now).await?;
            }
        }

        tx.commit().await?;

        Ok(AnswerView {
            question_id: slot.question_id,
            answer_status: answer.is_correct.into(),
            added_at: answer.added_at,
        })
    }
}
