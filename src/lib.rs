//! # roster
//!
//! A small roster manager: a list of players (name + jersey number) held in
//! a pure state container, with a terminal front-end for adding and removing
//! players.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `add` and `remove` compute a new roster and never
//!    touch their input. Old snapshots stay valid.
//!
//! 2. **Explicit Ownership**: The `Store` is built once at startup and passed
//!    by reference. No global instance.
//!
//! 3. **Validate at the Edge**: The form rejects bad input. The core accepts
//!    any player it is handed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so every
//!   dispatch can produce a fresh roster cheaply.
//!
//! - **Name-Keyed Removal**: Players have no surrogate id. Removing a name
//!   drops every player carrying it.
//!
//! ## Modules
//!
//! - `core`: Players, roster, actions, application state, configuration
//! - `store`: Reducers, selectors, the store
//! - `ui`: Rendering, the entry form, the terminal session
//! - `error`: Form and configuration errors

pub mod core;
pub mod error;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    add_player, initial_state, remove_player, AppState, NumberRange, Player, Roster,
    RosterAction, RosterConfig,
};

pub use crate::error::{ConfigError, FormError};

pub use crate::store::{
    add, players_selector, reduce, remove, AppReducer, PlayersReducer, Reducer, Store,
    SubscriptionId,
};

pub use crate::ui::{PlayerForm, Session};
