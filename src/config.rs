//! Session configuration for the command interpreter.
//!
//! Everything here has a sensible default, so a session works with no
//! configuration at all as long as a `stockfish` binary is on `PATH`.
//! Environment variables override the defaults:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CHESS_STOCKFISH` | engine binary | `stockfish` |
//! | `CHESS_DIFFICULTY` | skill level, 1 to 20 | `20` |
//! | `CHESS_MOVETIME_MS` | thinking time per suggestion | `3000` |

use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_STOCKFISH: &str = "CHESS_STOCKFISH";
pub const ENV_DIFFICULTY: &str = "CHESS_DIFFICULTY";
pub const ENV_MOVETIME: &str = "CHESS_MOVETIME_MS";

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 20;

/// Settings for suggesters used during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Path or name of the UCI engine binary
    pub stockfish_path: String,
    /// Engine `Skill Level`, 1 to 20
    pub difficulty: u8,
    /// Time the engine may think per suggestion
    pub movetime: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stockfish_path: "stockfish".to_string(),
            difficulty: MAX_DIFFICULTY,
            movetime: Duration::from_millis(3000),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by whatever environment variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_STOCKFISH) {
            if !path.trim().is_empty() {
                config.stockfish_path = path.trim().to_string();
            }
        }

        if let Some(value) = lookup(ENV_DIFFICULTY) {
            config.difficulty = parse_difficulty(&value)?;
        }

        if let Some(value) = lookup(ENV_MOVETIME) {
            let millis: u64 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
                var: ENV_MOVETIME,
                value: value.clone(),
            })?;
            config.movetime = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

/// Parse a skill level, rejecting anything outside 1..=20.
pub fn parse_difficulty(value: &str) -> Result<u8, ConfigError> {
    let level: u32 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var: ENV_DIFFICULTY,
        value: value.to_string(),
    })?;
    if level < MIN_DIFFICULTY as u32 || level > MAX_DIFFICULTY as u32 {
        return Err(ConfigError::DifficultyOutOfRange(level));
    }
    Ok(level as u8)
}
