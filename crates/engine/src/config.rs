//! Run configuration for a driven session.

use std::env;

use crate::core::GameConfig;
use crate::types::TICK_PERIOD_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    pub tick_period_ms: u32,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_period_ms: TICK_PERIOD_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    ///
    /// On top of the [`GameConfig::from_env`] variables:
    /// - `BLOCKFALL_TICK_MS`: tick period in milliseconds (non-zero)
    /// - `BLOCKFALL_LOG_PATH`: append a JSONL event log to this file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let game = GameConfig::from_lookup(&lookup);

        let tick_period_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_PERIOD_MS);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            game,
            tick_period_ms,
            log_path,
        }
    }
}
