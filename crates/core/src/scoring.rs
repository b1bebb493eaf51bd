//! Answer matching and the fastest-player bonus rule.

use crate::types::Timestamp;

/// Check a submitted answer against the accepted answers of a question.
///
/// Comparison is case-insensitive and ignores leading/trailing whitespace on
/// both sides. An empty accepted-answer list never matches.
pub fn is_answer_correct(submitted: &str, accepted: &[String]) -> bool {
    let submitted = submitted.trim().to_lowercase();
    accepted
        .iter()
        .any(|candidate| candidate.trim().to_lowercase() == submitted)
}

/// The part of a player's state the bonus rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishLine {
    pub finished_at: Option<Timestamp>,
    pub score: i32,
}

/// Which seat, if any, receives the fastest-player bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusAward {
    First,
    Second,
    Nobody,
}

/// Decide the fastest-player bonus for a finishing game.
///
/// Only applies when both players have a finish time. The earlier finisher
/// wins the bonus if they answered at least one question correctly. Equal
/// finish times go to the second player, matching a strict `<` comparison on
/// the first player's time.
pub fn fastest_player_bonus(first: FinishLine, second: FinishLine) -> BonusAward {
    let (Some(first_at), Some(second_at)) = (first.finished_at, second.finished_at) else {
        return BonusAward::Nobody;
    };

    let (seat, faster) = if first_at < second_at {
        (BonusAward::First, first)
    } else {
        (BonusAward::Second, second)
    };

    if faster.score > 0 {
        seat
    } else {
        BonusAward::Nobody
    }
}
