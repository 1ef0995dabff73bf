//! The store: owns application state and serializes transitions.
//!
//! Build one `Store` at startup and pass it by reference to whatever needs
//! to read or dispatch. There is no global instance.
//!
//! Dispatch is synchronous: the reducer runs, the state is replaced, then
//! every subscriber sees the new state in registration order.

use tracing::debug;

use super::reducer::{AppReducer, Reducer};
use crate::core::{AppState, RosterConfig};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener<S> = Box<dyn FnMut(&S)>;

/// State container driven by a reducer.
pub struct Store<R: Reducer = AppReducer> {
    reducer: R,
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u32,
    dispatch_count: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from the reducer's initial state.
    pub fn new(reducer: R) -> Self {
        let state = reducer.initial_state();
        Self::with_state(reducer, state)
    }

    /// Create a store starting from `state`.
    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self {
            reducer,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            dispatch_count: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions dispatched so far.
    #[must_use]
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    /// Apply `action` and notify subscribers.
    pub fn dispatch(&mut self, action: R::Action)
    where
        R::Action: std::fmt::Debug,
    {
        debug!(?action, sequence = self.dispatch_count, "dispatch");

        self.state = self.reducer.reduce(&self.state, &action);
        self.dispatch_count += 1;

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a callback run after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Store<AppReducer> {
    /// Create the application store seeded from `config`.
    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::with_state(
            AppReducer::new(),
            AppState::with_players(config.initial_roster()),
        )
    }
}

impl Default for Store<AppReducer> {
    fn default() -> Self {
        Self::new(AppReducer::new())
    }
}

impl<R> std::fmt::Debug for Store<R>
where
    R: Reducer + std::fmt::Debug,
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("reducer", &self.reducer)
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .field("dispatch_count", &self.dispatch_count)
            .finish()
    }
}
