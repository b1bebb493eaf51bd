//! Read models returned to callers: games, player progress and answers.
//!
//! Field names serialize in camelCase to match the public JSON contract.

use quizpair_core::types::{DbId, Timestamp};
use quizpair_db::models::answer::AnswerRecord;
use quizpair_db::models::game::Game;
use quizpair_db::models::game_question::AssignedQuestion;
use quizpair_db::models::player::Player;
use quizpair_db::models::status::{GameStatus, PlayerRole};
use serde::Serialize;

use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerStatus {
    Correct,
    Incorrect,
}

impl From<bool> for AnswerStatus {
    fn from(is_correct: bool) -> Self {
        if is_correct {
            AnswerStatus::Correct
        } else {
            AnswerStatus::Incorrect
        }
    }
}

/// One recorded answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    pub question_id: DbId,
    pub answer_status: AnswerStatus,
    pub added_at: Timestamp,
}

impl From<&AnswerRecord> for AnswerView {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            question_id: record.question_id,
            answer_status: record.is_correct.into(),
            added_at: record.added_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRef {
    /// The user id supplied by the identity provider.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    /// Ordered by submission time.
    pub answers: Vec<AnswerView>,
    pub player: PlayerRef,
    /// Score including any bonus.
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: DbId,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: DbId,
    pub first_player_progress: PlayerProgress,
    /// `None` while the game waits for its second player.
    pub second_player_progress: Option<PlayerProgress>,
    /// `None` while the game waits for its second player.
    pub questions: Option<Vec<QuestionView>>,
    pub status: &'static str,
    pub pair_created_date: Timestamp,
    pub start_game_date: Option<Timestamp>,
    pub finish_game_date: Option<Timestamp>,
}

/// One page of a user's games, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePage {
    pub items: Vec<GameView>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

impl GameView {
    /// Build the view of `game` from rows that may span several games;
    /// rows belonging to other games are ignored.
    pub(crate) fn assemble(
        game: &Game,
        players: &[Player],
        questions: &[AssignedQuestion],
        answers: &[AnswerRecord],
    ) -> GameResult<Self> {
        let seat = |role: PlayerRole| {
            players
                .iter()
                .find(|p| p.game_id == game.id && p.role() == role)
        };
        let progress = |player: &Player| PlayerProgress {
            answers: answers
                .iter()
                .filter(|a| a.game_id == game.id && a.player_id == player.id)
                .map(AnswerView::from)
                .collect(),
            player: PlayerRef {
                id: player.user_id.clone(),
            },
            score: player.total_score(),
        };

        let first = seat(PlayerRole::First)
            .ok_or_else(|| GameError::internal(format!("game {} has no first player", game.id)))?;

        let pending = game.status() == GameStatus::PendingSecondPlayer;
        let (second_player_progress, questions) = if pending {
            (None, None)
        } else {
            let questions = questions
                .iter()
                .filter(|q| q.game_id == game.id)
                .map(|q| QuestionView {
                    id: q.question_id,
                    body: q.body.clone(),
                })
                .collect();
            (seat(PlayerRole::Second).map(&progress), Some(questions))
        };

        Ok(Self {
            id: game.id,
            first_player_progress: progress(first),
            second_player_progress,
            questions,
            status: game.status().as_str(),
            pair_created_date: game.created_at,
            start_game_date: game.started_at,
            finish_game_date: game.finished_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(secs: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, secs).unwrap()
    }

    fn game(status: GameStatus) -> Game {
        Game {
            id: 7,
            status_id: status.id(),
            started_at: (status != GameStatus::PendingSecondPlayer).then(|| at(1)),
            finished_at: None,
            any_player_finished_at: None,
            created_at: at(0),
            updated_at: at(0),
        }
    }

    fn player(id: DbId, user: &str, role: PlayerRole, score: i32, bonus: i32) -> Player {
        Player {
            id,
            game_id: 7,
            user_id: user.to_string(),
            role_id: role.id(),
            score,
            bonus,
            finished_at: None,
            created_at: at(0),
            updated_at: at(0),
        }
    }

    fn question(id: DbId, position: i32) -> AssignedQuestion {
        AssignedQuestion {
            id: 100 + id,
            game_id: 7,
            question_id: id,
            position,
            body: format!("Q{id}?"),
            correct_answers: vec!["yes".to_string()],
        }
    }

    fn answer(player_id: DbId, question_id: DbId, correct: bool, secs: u32) -> AnswerRecord {
        AnswerRecord {
            id: 1000 + question_id,
            game_id: 7,
            player_id,
            question_id,
            position: 0,
            is_correct: correct,
            added_at: at(secs),
        }
    }

    #[test]
    fn pending_game_hides_second_player_and_questions() {
        let players = [player(1, "alice", PlayerRole::First, 0, 0)];
        let view = GameView::assemble(&game(GameStatus::PendingSecondPlayer), &players, &[], &[])
            .unwrap();

        assert_eq!(view.status, "PendingSecondPlayer");
        assert!(view.second_player_progress.is_none());
        assert!(view.questions.is_none());
        assert_eq!(view.first_player_progress.player.id, "alice");
        assert_eq!(view.start_game_date, None);
    }

    #[test]
    fn active_game_reports_progress_per_player() {
        let players = [
            player(1, "alice", PlayerRole::First, 1, 1),
            player(2, "bob", PlayerRole::Second, 0, 0),
        ];
        let questions = [question(11, 0), question(12, 1)];
        let answers = [
            answer(1, 11, true, 2),
            answer(2, 11, false, 3),
            answer(1, 12, false, 4),
        ];
        let view =
            GameView::assemble(&game(GameStatus::Active), &players, &questions, &answers).unwrap();

        assert_eq!(view.status, "Active");
        assert_eq!(view.first_player_progress.score, 2);
        assert_eq!(view.first_player_progress.answers.len(), 2);
        let second = view.second_player_progress.unwrap();
        assert_eq!(second.player.id, "bob");
        assert_eq!(second.answers[0].answer_status, AnswerStatus::Incorrect);
        let ids: Vec<DbId> = view.questions.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn missing_first_player_is_an_error() {
        let players = [player(2, "bob", PlayerRole::Second, 0, 0)];
        assert!(GameView::assemble(&game(GameStatus::Active), &players, &[], &[]).is_err());
    }

    #[test]
    fn serializes_public_field_names() {
        let players = [player(1, "alice", PlayerRole::First, 0, 0)];
        let view = GameView::assemble(&game(GameStatus::PendingSecondPlayer), &players, &[], &[])
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "PendingSecondPlayer");
        assert!(json["secondPlayerProgress"].is_null());
        assert!(json["questions"].is_null());
        assert!(json["finishGameDate"].is_null());
        assert!(json.get("pairCreatedDate").is_some());
        assert_eq!(json["firstPlayerProgress"]["player"]["id"], "alice");
        assert_eq!(json["firstPlayerProgress"]["score"], 0);
    }

    #[test]
    fn answer_view_uses_status_labels() {
        let view = AnswerView::from(&answer(1, 11, true, 2));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["questionId"], 11);
        assert_eq!(json["answerStatus"], "Correct");
    }
}
