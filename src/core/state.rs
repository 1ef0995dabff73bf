//! Application state.
//!
//! `AppState` is the larger state the store holds. Each slice lives under
//! its own field; the roster is the `players` slice. Reads go through
//! selectors (`store::selector`) rather than touching fields directly.

use serde::{Deserialize, Serialize};

use super::roster::Roster;

/// Complete application state.
///
/// Cloning is O(1): the roster is a persistent vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The players slice.
    pub players: Roster,
}

impl AppState {
    /// Create state with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an existing roster.
    #[must_use]
    pub fn with_players(players: Roster) -> Self {
        Self { players }
    }
}

/// The players slice's starting value: an empty roster.
#[must_use]
pub fn initial_state() -> Roster {
    Roster::new()
}
