//! Application configuration.
//!
//! The front-end configures the app at startup with a `RosterConfig`:
//! - the players the roster starts with
//! - the jersey number range the entry form accepts
//!
//! Neither setting changes what the core accepts. The range only applies to
//! form submissions.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::roster::Roster;
use crate::error::ConfigError;

/// Lowest jersey number the form accepts by default.
pub const DEFAULT_MIN_NUMBER: i64 = 0;

/// Highest jersey number the form accepts by default.
pub const DEFAULT_MAX_NUMBER: i64 = 99;

/// Inclusive range of jersey numbers accepted at the form boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    /// Create a range. Does not check `min <= max`; see `RosterConfig::validate`.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check whether `value` is inside the range.
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_NUMBER, DEFAULT_MAX_NUMBER)
    }
}

impl std::fmt::Display for NumberRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Players present when the app starts.
    pub seed_players: Vec<Player>,

    /// Range enforced by the entry form.
    pub number_range: NumberRange,
}

impl RosterConfig {
    /// Create an empty configuration: no seed players, default range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed_players: Vec::new(),
            number_range: NumberRange::default(),
        }
    }

    /// Add a seed player.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.seed_players.push(player);
        self
    }

    /// Set the accepted number range.
    #[must_use]
    pub fn with_number_range(mut self, min: i64, max: i64) -> Self {
        self.number_range = NumberRange::new(min, max);
        self
    }

    /// Drop all seed players.
    #[must_use]
    pub fn without_seed(mut self) -> Self {
        self.seed_players.clear();
        self
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let NumberRange { min, max } = self.number_range;
        if min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(())
    }

    /// Build the starting roster from the seed players.
    #[must_use]
    pub fn initial_roster(&self) -> Roster {
        self.seed_players.iter().cloned().collect()
    }
}

/// The stock configuration: three seed players and the 0-99 range.
impl Default for RosterConfig {
    fn default() -> Self {
        Self::new()
            .with_player(Player::new("LeBron James", 23))
            .with_player(Player::new("Michael Jordan", 23))
            .with_player(Player::new("Anfernee Simons", 1))
    }
}
