//! The roster: an ordered, persistent sequence of players.
//!
//! Backed by `im::Vector`, so cloning is O(1) and every transition returns
//! a new `Roster` while earlier snapshots stay untouched. Callers never see
//! a roster change underneath them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::Player;

/// Ordered collection of players, insertion order preserved.
///
/// ## Example
///
/// ```
/// use roster::core::{Player, Roster};
///
/// let empty = Roster::new();
/// let one = empty.with_player(Player::new("Scoot Henderson", 0));
///
/// assert!(empty.is_empty());
/// assert_eq!(one.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vector::new(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Get the player at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Check whether any player carries `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.has_name(name))
    }

    /// Return a new roster with `player` appended. O(1) amortized.
    #[must_use]
    pub fn with_player(&self, player: Player) -> Self {
        let mut players = self.players.clone();
        players.push_back(player);
        Self { players }
    }

    /// Return a new roster without any player named `name`. O(n).
    ///
    /// All matches are dropped; an absent name yields an equal roster.
    #[must_use]
    pub fn without_name(&self, name: &str) -> Self {
        if !self.contains_name(name) {
            return self.clone();
        }

        let players = self
            .players
            .iter()
            .filter(|p| !p.has_name(name))
            .cloned()
            .collect();
        Self { players }
    }

    /// Copy the players out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Player> {
        self.players.iter().cloned().collect()
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        players.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = im::vector::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
