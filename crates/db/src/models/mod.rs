//! Row models for the pair-game tables.

pub mod answer;
pub mod game;
pub mod game_question;
pub mod player;
pub mod question;
pub mod status;
pub mod user_statistic;
