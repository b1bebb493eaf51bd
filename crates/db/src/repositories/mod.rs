//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Plain
//! reads accept any Postgres executor (`&PgPool` or `&mut PgConnection`);
//! methods that lock rows or must run inside the caller's transaction take
//! `&mut PgConnection`.

pub mod answer_repo;
pub mod game_question_repo;
pub mod game_repo;
pub mod player_repo;
pub mod question_repo;
pub mod user_statistic_repo;

pub use answer_repo::AnswerRepo;
pub use game_question_repo::GameQuestionRepo;
pub use game_repo::GameRepo;
pub use player_repo::PlayerRepo;
pub use question_repo::QuestionRepo;
pub use user_statistic_repo::UserStatisticRepo;
