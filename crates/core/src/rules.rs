//! Tunable game settings.

use std::time::Duration;

/// Number of questions assigned to every game.
pub const DEFAULT_QUESTIONS_PER_GAME: i32 = 5;

/// Bonus awarded to the faster finisher (with at least one correct answer).
pub const DEFAULT_FASTEST_PLAYER_BONUS: i32 = 1;

/// Grace window after the first player finishes before the game is forced.
pub const DEFAULT_TIMEOUT_GRACE: Duration = Duration::from_secs(10);

/// How often the timeout sweeper looks for stalled games.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(2);

/// Settings shared by matchmaking, answer submission and the sweeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// `K`: questions per game. Question positions are `0..K`.
    pub questions_per_game: i32,
    pub fastest_player_bonus: i32,
    pub timeout_grace: Duration,
    pub sweep_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            questions_per_game: DEFAULT_QUESTIONS_PER_GAME,
            fastest_player_bonus: DEFAULT_FASTEST_PLAYER_BONUS,
            timeout_grace: DEFAULT_TIMEOUT_GRACE,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl GameSettings {
    /// Position of the last question in a game.
    pub fn last_position(&self) -> i32 {
        self.questions_per_game - 1
    }

    /// Grace window as a chrono duration, for timestamp arithmetic.
    pub fn timeout_grace_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.timeout_grace).unwrap_or(chrono::Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = GameSettings::default();
        assert_eq!(settings.questions_per_game, 5);
        assert_eq!(settings.fastest_player_bonus, 1);
        assert_eq!(settings.timeout_grace, Duration::from_secs(10));
        assert_eq!(settings.sweep_interval, Duration::from_secs(2));
    }

    #[test]
    fn last_position_is_zero_based() {
        let settings = GameSettings {
            questions_per_game: 3,
            ..GameSettings::default()
        };
        assert_eq!(settings.last_position(), 2);
    }

    #[test]
    fn grace_converts_to_chrono() {
        let settings = GameSettings::default();
        assert_eq!(settings.timeout_grace_chrono(), chrono::Duration::seconds(10));
    }
}
