//! Mutation requests for the players slice.
//!
//! An action is a named instruction with a payload. The store feeds each
//! one through the reducer to move the roster from one value to the next.
//! Use the action creators (`add_player`, `remove_player`) rather than
//! building variants by hand at call sites.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A mutation request against the roster.
///
/// ## Example
///
/// ```
/// use roster::core::{add_player, remove_player, Player, RosterAction};
///
/// let add = add_player(Player::new("Scoot Henderson", 0));
/// assert_eq!(add.kind(), "players/addPlayer");
///
/// let remove = remove_player("Damian Lillard");
/// assert_eq!(remove, RosterAction::Remove("Damian Lillard".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum RosterAction {
    /// Append a player to the end of the roster.
    #[serde(rename = "players/addPlayer")]
    Add(Player),

    /// Drop every player with this name.
    #[serde(rename = "players/removePlayer")]
    Remove(String),
}

impl RosterAction {
    /// Action type string, namespaced by slice.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RosterAction::Add(_) => "players/addPlayer",
            RosterAction::Remove(_) => "players/removePlayer",
        }
    }
}

/// Create an add request.
#[must_use]
pub fn add_player(player: Player) -> RosterAction {
    RosterAction::Add(player)
}

/// Create a remove request.
pub fn remove_player(name: impl Into<String>) -> RosterAction {
    RosterAction::Remove(name.into())
}
