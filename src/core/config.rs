//! Match configuration.
//!
//! All tunables have the reference defaults, so `MatchConfig::default()` is a
//! standard match. The struct deserializes with missing fields filled from the
//! defaults, which lets a host load partial overrides from JSON or TOML.

use serde::{Deserialize, Serialize};

use super::error::MatchError;

/// Hard ceiling on a player's mana pool.
pub const MANA_CEILING: u32 = 10;

/// Largest deck a configuration may ask for.
pub const MAX_DECK_SIZE: usize = 200;

/// Inclusive bounds for generated card stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl Default for StatRange {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

/// Tunables for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards per deck.
    pub deck_size: usize,

    /// Cards dealt to each player before the first turn.
    pub starting_hand_size: usize,

    /// Leader life at the start of the match.
    pub starting_life: i64,

    /// Mana pool cap, at most `MANA_CEILING`.
    pub max_mana: u32,

    /// Cost, attack and defense bounds used by generated decks.
    pub stat_range: StatRange,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 20,
            starting_hand_size: 4,
            starting_life: 20,
            max_mana: MANA_CEILING,
            stat_range: StatRange::default(),
        }
    }
}

impl MatchConfig {
    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.deck_size > MAX_DECK_SIZE {
            return Err(MatchError::InvalidConfig(format!(
                "deck_size must be at most {MAX_DECK_SIZE}, got {}",
                self.deck_size
            )));
        }
        if self.starting_hand_size > self.deck_size {
            return Err(MatchError::InvalidConfig(format!(
                "starting_hand_size {} exceeds deck_size {}",
                self.starting_hand_size, self.deck_size
            )));
        }
        if self.max_mana == 0 || self.max_mana > MANA_CEILING {
            return Err(MatchError::InvalidConfig(format!(
                "max_mana must be in 1..={MANA_CEILING}, got {}",
                self.max_mana
            )));
        }
        if self.starting_life <= 0 {
            return Err(MatchError::InvalidConfig(format!(
                "starting_life must be positive, got {}",
                self.starting_life
            )));
        }
        if self.stat_range.min > self.stat_range.max {
            return Err(MatchError::InvalidConfig(format!(
                "stat_range min {} exceeds max {}",
                self.stat_range.min, self.stat_range.max
            )));
        }
        Ok(())
    }
}
