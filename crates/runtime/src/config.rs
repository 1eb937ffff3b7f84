//! Runtime settings.
//!
//! Combat balance lives in `config.toml` (see `skirmish-content`); this module
//! only covers how a single battle is set up: where content comes from, which
//! roster fights and which seed drives the dice.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use skirmish_content::embedded::DEFAULT_ROSTER;

/// Runtime configuration for one battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `abilities.ron`, `units.ron`, `rosters.ron` and an
    /// optional `config.toml`. `None` uses the embedded data set.
    pub data_dir: Option<PathBuf>,
    /// Battle seed. `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Overrides `max_rounds` from the combat configuration.
    pub max_rounds: Option<u32>,
    /// Name of the roster to fight.
    pub roster: String,
}

impl RuntimeConfig {
    pub const DATA_DIR_ENV: &'static str = "SKIRMISH_DATA_DIR";
    pub const SEED_ENV: &'static str = "SKIRMISH_SEED";
    pub const MAX_ROUNDS_ENV: &'static str = "SKIRMISH_MAX_ROUNDS";
    pub const ROSTER_ENV: &'static str = "SKIRMISH_ROSTER";

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: read_env::<PathBuf>(Self::DATA_DIR_ENV).or(defaults.data_dir),
            seed: read_env(Self::SEED_ENV).or(defaults.seed),
            max_rounds: read_env::<u32>(Self::MAX_ROUNDS_ENV)
                .filter(|&rounds| rounds > 0)
                .or(defaults.max_rounds),
            roster: read_env(Self::ROSTER_ENV).unwrap_or(defaults.roster),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_roster(mut self, roster: impl Into<String>) -> Self {
        self.roster = roster.into();
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            max_rounds: None,
            roster: DEFAULT_ROSTER.to_owned(),
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}
