//! Core types: players, the roster, actions, application state, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod roster;
pub mod state;

pub use action::{add_player, remove_player, RosterAction};
pub use config::{NumberRange, RosterConfig, DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER};
pub use player::Player;
pub use roster::Roster;
pub use state::{initial_state, AppState};
