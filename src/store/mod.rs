//! State container: reducers, selectors and the store that runs them.
//!
//! The store calls into `Reducer` but never interprets slice-specific
//! actions directly.

pub mod reducer;
pub mod selector;
pub mod store;

pub use reducer::{add, reduce, remove, AppReducer, PlayersReducer, Reducer};
pub use selector::players_selector;
pub use store::{Store, SubscriptionId};
