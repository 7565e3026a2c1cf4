//! Runtime configuration.

use std::path::PathBuf;

use crate::client::DEFAULT_API_URL;

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// How many random questions to ask the service for.
    pub question_count: usize,
    /// Countdown length for one play-through.
    pub time_limit_secs: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

/// Everything the quiz needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub game: GameSettings,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            game: GameSettings::default(),
            log_file: None,
        }
    }
}
