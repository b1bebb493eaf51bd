#![allow(dead_code)]

use std::sync::Arc;

use quizpair_core::clock::{Clock, ManualClock};
use quizpair_core::rules::GameSettings;
use quizpair_core::types::{DbId, Timestamp};
use quizpair_db::models::question::CreateQuestion;
use quizpair_db::models::status::GameStatus;
use quizpair_db::repositories::{GameQuestionRepo, GameRepo, QuestionRepo};
use quizpair_game::{AnswerView, GameService, GameView};
use sqlx::PgPool;

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const CAROL: &str = "carol";

/// A service on a manual clock, plus handles for driving it.
pub struct Harness {
    pub pool: PgPool,
    pub clock: Arc<ManualClock>,
    pub service: GameService,
}

impl Harness {
    pub fn new(pool: PgPool) -> Self {
        let clock = Arc::new(ManualClock::at_epoch());
        let service = GameService::new(pool.clone(), clock.clone(), GameSettings::default());
        Self {
            pool,
            clock,
            service,
        }
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn tick(&self, secs: i64) {
        self.clock.advance(chrono::Duration::seconds(secs));
    }

    /// Seed published questions; question `i` accepts `answer {i}`.
    pub async fn seed_questions(&self, count: usize) {
        for i in 0..count {
            QuestionRepo::create(
                &self.pool,
                &CreateQuestion {
                    body: format!("Question {i}?"),
                    correct_answers: vec![format!("answer {i}"), format!("alt {i}")],
                    published: true,
                },
            )
            .await
            .unwrap();
        }
    }

    /// Pair `first` and `second` into an active game.
    pub async fn start_game(&self, first: &str, second: &str) -> GameView {
        let pending = self.service.connect(first).await.unwrap();
        let game = self.start_game_with_waiting(second).await;
        assert_eq!(game.id, pending.id);
        game
    }

    /// Join the single waiting game as its second player.
    pub async fn start_game_with_waiting(&self, second: &str) -> GameView {
        self.tick(1);
        let game = self.service.connect(second).await.unwrap();
        assert_eq!(game.status, "Active");
        game
    }

    /// Accepted answer of the question at `position` in a game.
    pub async fn correct_answer(&self, game_id: DbId, position: i32) -> String {
        let questions = GameQuestionRepo::list_by_game(&self.pool, game_id).await.unwrap();
        questions
            .iter()
            .find(|q| q.position == position)
            .map(|q| q.correct_answers[0].clone())
            .unwrap()
    }

    /// Submit the next answer for `user`, correct or deliberately wrong.
    pub async fn answer(&self, user: &str, game_id: DbId, position: i32, correct: bool) -> AnswerView {
        let text = if correct {
            self.correct_answer(game_id, position).await
        } else {
            "definitely wrong".to_string()
        };
        self.tick(1);
        self.service.submit_answer(user, &text).await.unwrap()
    }

    /// Answer `count` questions starting at `from`, the first `correct`
    /// of them correctly.
    pub async fn answer_run(&self, user: &str, game_id: DbId, from: i32, count: i32, correct: i32) {
        for i in 0..count {
            self.answer(user, game_id, from + i, i < correct).await;
        }
    }

    pub async fn game_status(&self, game_id: DbId) -> GameStatus {
        GameRepo::find_by_id(&self.pool, game_id)
            .await
            .unwrap()
            .unwrap()
            .status()
    }
}
