use std::time::Duration;

use quizpair_core::rules::GameSettings;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Game rules and sweeper cadence.
    pub game: GameSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `DATABASE_URL`                | required                |
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `QUESTIONS_PER_GAME`          | `5`                     |
    /// | `GAME_TIMEOUT_SECS`           | `10`                    |
    /// | `TIMEOUT_SWEEP_INTERVAL_SECS` | `2`                     |
    /// | `FASTEST_PLAYER_BONUS`        | `1`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameSettings::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let questions_per_game: i32 =
            parse_or(&lookup, "QUESTIONS_PER_GAME", defaults.questions_per_game)?;
        if questions_per_game < 1 {
            return Err(ConfigError::Invalid {
                key: "QUESTIONS_PER_GAME",
                value: questions_per_game.to_string(),
            });
        }
        let fastest_player_bonus: i32 =
            parse_or(&lookup, "FASTEST_PLAYER_BONUS", defaults.fastest_player_bonus)?;
        if fastest_player_bonus < 0 {
            return Err(ConfigError::Invalid {
                key: "FASTEST_PLAYER_BONUS",
                value: fastest_player_bonus.to_string(),
            });
        }
        let timeout_secs: u64 =
            parse_or(&lookup, "GAME_TIMEOUT_SECS", defaults.timeout_grace.as_secs())?;
        let sweep_secs: u64 = parse_or(
            &lookup,
            "TIMEOUT_SWEEP_INTERVAL_SECS",
            defaults.sweep_interval.as_secs(),
        )?;
        if sweep_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "TIMEOUT_SWEEP_INTERVAL_SECS",
                value: "0".into(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            game: GameSettings {
                questions_per_game,
                fastest_player_bonus,
                timeout_grace: Duration::from_secs(timeout_secs),
                sweep_interval: Duration::from_secs(sweep_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
