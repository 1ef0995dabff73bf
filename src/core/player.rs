//! Player records.
//!
//! A `Player` is a display name plus a jersey number. There is no surrogate
//! identifier: the name is the key used for removal, and it is not unique.
//! Numbers are not unique either (two seed players both wear 23).

use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// The core accepts any value here. Range checks on `number` and the
/// non-empty check on `name` live at the form boundary (`ui::form`).
///
/// ```
/// use roster::core::Player;
///
/// let player = Player::new("Scoot Henderson", 0);
/// assert_eq!(player.name, "Scoot Henderson");
/// assert_eq!(player.to_string(), "#0 - Scoot Henderson");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Used as the removal key.
    pub name: String,

    /// Jersey number.
    pub number: i64,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// Check whether this player is keyed by `name`.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} - {}", self.number, self.name)
    }
}
