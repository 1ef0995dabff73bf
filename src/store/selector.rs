//! Selectors: pure reads from `AppState`.

use crate::core::{AppState, Roster};

/// Project the roster out of the application state.
///
/// ```
/// use roster::core::{AppState, Player, Roster};
/// use roster::store::players_selector;
///
/// let state = AppState::with_players(Roster::from(vec![Player::new("Scoot Henderson", 0)]));
/// assert_eq!(players_selector(&state).len(), 1);
/// ```
#[must_use]
pub fn players_selector(state: &AppState) -> &Roster {
    &state.players
}
