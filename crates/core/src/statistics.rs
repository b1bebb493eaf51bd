//! Per-user game statistic arithmetic.

use serde::Serialize;

/// Result of one finished game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Compare total scores (score + bonus) of a player and their opponent.
    pub fn from_scores(own: i32, opponent: i32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Running totals for one user.
///
/// `wins + losses + draws == games_count` holds after every
/// [`StatisticTally::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticTally {
    pub sum_score: i64,
    #[serde(rename = "avgScores")]
    pub avg_score: f64,
    pub games_count: i32,
    pub wins_count: i32,
    pub losses_count: i32,
    pub draws_count: i32,
}

impl StatisticTally {
    /// Fold one finished game into the totals and recompute the average.
    pub fn record(&mut self, own_score: i32, opponent_score: i32) -> Outcome {
        let outcome = Outcome::from_scores(own_score, opponent_score);

        self.sum_score += i64::from(own_score);
        self.games_count += 1;
        match outcome {
            Outcome::Win => self.wins_count += 1,
            Outcome::Loss => self.losses_count += 1,
            Outcome::Draw => self.draws_count += 1,
        }
        self.avg_score = average_score(self.sum_score, self.games_count);

        outcome
    }
}

/// `sum / games`, rounded to two decimals unless the quotient is integral.
/// Zero games averages to zero.
pub fn average_score(sum_score: i64, games_count: i32) -> f64 {
    if games_count == 0 {
        return 0.0;
    }

    let raw = sum_score as f64 / f64::from(games_count);
    if raw.fract() == 0.0 {
        raw
    } else {
        (raw * 100.0).round() / 100.0
    }
}
