//! Reducers: pure state transitions.
//!
//! A reducer maps `(state, action)` to a new state. It never mutates its
//! input, so any snapshot a reader holds stays valid after a dispatch.
//!
//! ## Implementation Notes
//!
//! - `PlayersReducer` handles the roster slice.
//! - `AppReducer` routes the whole `AppState` to its slices.
//! - Both transitions are total: nothing here returns an error.

use crate::core::{AppState, Player, Roster, RosterAction};

/// Reducer trait.
///
/// The store calls `reduce` once per dispatched action and replaces its
/// state with the result.
pub trait Reducer {
    /// State this reducer evolves.
    type State: Clone;

    /// Mutation requests it understands.
    type Action;

    /// Compute the next state.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Starting state.
    fn initial_state(&self) -> Self::State;
}

/// Append `player` to the end of `roster`.
///
/// No normalization or validation; every other entry keeps its position.
#[must_use]
pub fn add(roster: &Roster, player: Player) -> Roster {
    roster.with_player(player)
}

/// Keep exactly the players whose name differs from `name`.
///
/// Removing an absent name returns an equal roster. Duplicates are all
/// removed.
#[must_use]
pub fn remove(roster: &Roster, name: &str) -> Roster {
    roster.without_name(name)
}

/// Apply one action to a roster.
#[must_use]
pub fn reduce(roster: &Roster, action: &RosterAction) -> Roster {
    match action {
        RosterAction::Add(player) => add(roster, player.clone()),
        RosterAction::Remove(name) => remove(roster, name),
    }
}

/// Reducer for the players slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayersReducer;

impl Reducer for PlayersReducer {
    type State = Roster;
    type Action = RosterAction;

    fn reduce(&self, state: &Roster, action: &RosterAction) -> Roster {
        reduce(state, action)
    }

    fn initial_state(&self) -> Roster {
        crate::core::initial_state()
    }
}

/// Root reducer over `AppState`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer {
    players: PlayersReducer,
}

impl AppReducer {
    /// Create the root reducer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = RosterAction;

    fn reduce(&self, state: &AppState, action: &RosterAction) -> AppState {
        AppState {
            players: self.players.reduce(&state.players, action),
        }
    }

    fn initial_state(&self) -> AppState {
        AppState::with_players(self.players.initial_state())
    }
}
