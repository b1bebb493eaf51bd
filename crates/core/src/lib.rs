//! Domain types and pure game rules shared by every quizpair crate.
//!
//! Nothing in here touches the database: answer matching, the fastest-player
//! bonus rule, statistic arithmetic and the injected [`clock::Clock`] live
//! here so they can be unit tested without PostgreSQL.

pub mod clock;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod statistics;
pub mod types;
