use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::sim::MatchError;

/// Square boards larger than this are rejected.
pub const MAX_BOARD_SIZE: i32 = 256;
pub const MAX_CAPACITY: i32 = 100;

/// Match runner settings, read from `DIAMONDBOT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u64,
    pub matches: usize,
    pub cascade_bots: usize,
    pub random_bots: usize,
    pub board_size: i32,
    pub turns: i32,
    /// Diamonds placed on every (re)spawn.
    pub diamonds: usize,
    pub teleporters: usize,
    pub capacity: i32,
    pub replays_folder: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            matches: 1,
            cascade_bots: 2,
            random_bots: 1,
            board_size: 15,
            turns: 100,
            diamonds: 10,
            teleporters: 2,
            capacity: 5,
            replays_folder: None,
        }
    }
}

fn get_env_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

fn check_range(key: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<(), MatchError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(MatchError::InvalidConfig {
        key,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

impl SimConfig {
    /// Read every setting, falling back to defaults for unset or unparsable values.
    /// Out-of-range sizes are an error.
    pub fn from_env() -> Result<Self, MatchError> {
        let defaults = Self::default();
        let config = Self {
            seed: get_env_var("DIAMONDBOT_SEED").unwrap_or(defaults.seed),
            matches: get_env_var("DIAMONDBOT_MATCHES").unwrap_or(defaults.matches),
            cascade_bots: get_env_var("DIAMONDBOT_BOTS").unwrap_or(defaults.cascade_bots),
            random_bots: get_env_var("DIAMONDBOT_RANDOM_BOTS").unwrap_or(defaults.random_bots),
            board_size: get_env_var("DIAMONDBOT_BOARD_SIZE").unwrap_or(defaults.board_size),
            turns: get_env_var("DIAMONDBOT_TURNS").unwrap_or(defaults.turns),
            diamonds: get_env_var("DIAMONDBOT_DIAMONDS").unwrap_or(defaults.diamonds),
            teleporters: get_env_var("DIAMONDBOT_TELEPORTERS").unwrap_or(defaults.teleporters),
            capacity: get_env_var("DIAMONDBOT_CAPACITY").unwrap_or(defaults.capacity),
            replays_folder: env::var("DIAMONDBOT_REPLAYS_FOLDER").ok(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        check_range("DIAMONDBOT_BOARD_SIZE", self.board_size, 1..=MAX_BOARD_SIZE)?;
        check_range("DIAMONDBOT_CAPACITY", self.capacity, 1..=MAX_CAPACITY)?;
        Ok(())
    }

    pub fn bot_count(&self) -> usize {
        self.cascade_bots + self.random_bots
    }
}
