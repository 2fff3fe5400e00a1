//! Game configuration.
//!
//! Defaults are the reference values; `from_env` lets a run override them.
//! Values that fail to parse or are out of range fall back to the default.

use std::env;

use crate::generator::{BagGenerator, PieceGenerator, UniformGenerator};
use crate::types::{GRID_COLS, GRID_ROWS, LINE_CLEAR_REWARD, MIN_GRID_EDGE};

/// Which piece generation policy a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draws (reference behavior).
    #[default]
    Uniform,
    /// Shuffled 7-bag.
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }

    /// Build the generator for this policy.
    pub fn generator(self, seed: u32) -> Box<dyn PieceGenerator> {
        match self {
            Randomizer::Uniform => Box::new(UniformGenerator::new(seed)),
            Randomizer::Bag => Box::new(BagGenerator::new(seed)),
        }
    }
}

/// Seed used when none was pinned.
pub const DEFAULT_SEED: u32 = 1;

/// Parameters of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub line_clear_reward: u32,
    pub randomizer: Randomizer,
    /// Pinned RNG seed. `None` leaves the choice to the caller; sessions
    /// built from such a config use [`DEFAULT_SEED`].
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            line_clear_reward: LINE_CLEAR_REWARD,
            randomizer: Randomizer::Uniform,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_ROWS`, `BLOCKFALL_COLS`: grid size (at least 4 each)
    /// - `BLOCKFALL_SEED`: RNG seed; only a value that parses pins it
    /// - `BLOCKFALL_RANDOMIZER`: `uniform` or `bag`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let edge = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|&v| v >= MIN_GRID_EDGE)
                .unwrap_or(default)
        };

        let rows = edge("BLOCKFALL_ROWS", defaults.rows);
        let cols = edge("BLOCKFALL_COLS", defaults.cols);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .or(defaults.seed);

        let randomizer = lookup("BLOCKFALL_RANDOMIZER")
            .and_then(|s| Randomizer::from_str(&s))
            .unwrap_or(defaults.randomizer);

        Self {
            rows,
            cols,
            line_clear_reward: defaults.line_clear_reward,
            randomizer,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seed sessions actually start from.
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
