//! Integration tests for the players slice.
//!
//! Covers the reducer transitions, the selector, the store, and the
//! properties every roster transition must keep.

use proptest::prelude::*;

use roster::core::{add_player, remove_player, AppState, Player, Roster};
use roster::store::{add, players_selector, reduce, remove, AppReducer, Reducer, Store};
use roster::ui::PlayerForm;
use roster::NumberRange;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_add_player_to_empty_roster() {
    let updated = reduce(&Roster::new(), &add_player(Player::new("Scoot Henderson", 0)));
    assert_eq!(updated.to_vec(), vec![Player::new("Scoot Henderson", 0)]);
}

#[test]
fn test_remove_player_from_roster() {
    let roster = Roster::from(vec![
        Player::new("Scoot Henderson", 0),
        Player::new("Damian Lillard", 0),
    ]);
    let updated = reduce(&roster, &remove_player("Damian Lillard"));
    assert_eq!(updated.to_vec(), vec![Player::new("Scoot Henderson", 0)]);
}

#[test]
fn test_selector_returns_all_players() {
    let state = AppState::with_players(Roster::from(vec![Player::new("Scoot Henderson", 0)]));
    assert_eq!(
        players_selector(&state).to_vec(),
        vec![Player::new("Scoot Henderson", 0)]
    );
}

/// Submitting the form parses the number text and dispatches an add.
#[test]
fn test_form_submission_dispatches_add() {
    let mut store: Store = Store::default();
    let before = players_selector(store.state()).clone();

    let action = PlayerForm::new("LeBron James", "23")
        .submit(NumberRange::default())
        .expect("valid form");
    store.dispatch(action);

    assert_eq!(
        players_selector(store.state()),
        &add(&before, Player::new("LeBron James", 23))
    );
}

/// Duplicate names are allowed and all go on a single remove.
#[test]
fn test_duplicate_names_removed_together() {
    let mut store: Store = Store::new(AppReducer::new());
    store.dispatch(add_player(Player::new("Anfernee Simons", 1)));
    store.dispatch(add_player(Player::new("Michael Jordan", 23)));
    store.dispatch(add_player(Player::new("Anfernee Simons", 24)));

    assert_eq!(players_selector(store.state()).len(), 3);

    store.dispatch(remove_player("Anfernee Simons"));
    assert_eq!(
        players_selector(store.state()).to_vec(),
        vec![Player::new("Michael Jordan", 23)]
    );
}

/// The core stores whatever it is handed.
#[test]
fn test_core_does_not_validate() {
    let roster = add(&Roster::new(), Player::new("", 1000));
    assert_eq!(roster.get(0), Some(&Player::new("", 1000)));
}

/// A snapshot taken before a dispatch is unaffected by it.
#[test]
fn test_snapshots_survive_dispatch() {
    let mut store: Store = Store::default();
    store.dispatch(add_player(Player::new("Scoot Henderson", 0)));

    let snapshot = store.state().clone();
    store.dispatch(add_player(Player::new("Damian Lillard", 0)));
    store.dispatch(remove_player("Scoot Henderson"));

    assert_eq!(snapshot.players.to_vec(), vec![Player::new("Scoot Henderson", 0)]);
    assert_eq!(
        store.state().players.to_vec(),
        vec![Player::new("Damian Lillard", 0)]
    );
}

#[test]
fn test_app_reducer_initial_state() {
    assert_eq!(AppReducer::new().initial_state(), AppState::new());
}

// =============================================================================
// Properties
// =============================================================================

fn player_strategy() -> impl Strategy<Value = Player> {
    // Tiny name alphabet so generated rosters share names often.
    ("[abc]{0,2}", -5i64..120).prop_map(|(name, number)| Player::new(name, number))
}

fn roster_strategy() -> impl Strategy<Value = Roster> {
    prop::collection::vec(player_strategy(), 0..12).prop_map(Roster::from)
}

proptest! {
    #[test]
    fn prop_add_appends(roster in roster_strategy(), player in player_strategy()) {
        let updated = add(&roster, player.clone());

        prop_assert_eq!(updated.len(), roster.len() + 1);
        prop_assert_eq!(updated.get(roster.len()), Some(&player));

        let mut expected = roster.to_vec();
        expected.push(player);
        prop_assert_eq!(updated.to_vec(), expected);
    }

    #[test]
    fn prop_remove_absent_is_noop(roster in roster_strategy()) {
        // Generated names never exceed two characters.
        let updated = remove(&roster, "not on the roster");
        prop_assert_eq!(updated, roster);
    }

    #[test]
    fn prop_remove_drops_all_matches(roster in roster_strategy(), name in "[abc]{0,2}") {
        let updated = remove(&roster, &name);

        prop_assert!(updated.iter().all(|p| p.name != name));

        let expected: Vec<Player> = roster.iter().filter(|p| p.name != name).cloned().collect();
        prop_assert_eq!(updated.to_vec(), expected);
    }

    #[test]
    fn prop_remove_is_idempotent(roster in roster_strategy(), name in "[abc]{0,2}") {
        let once = remove(&roster, &name);
        let twice = remove(&once, &name);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_transitions_leave_input_untouched(
        roster in roster_strategy(),
        player in player_strategy(),
        name in "[abc]{0,2}",
    ) {
        let before = roster.to_vec();
        let _ = add(&roster, player);
        let _ = remove(&roster, &name);
        prop_assert_eq!(roster.to_vec(), before);
    }

    #[test]
    fn prop_selector_is_pure(roster in roster_strategy()) {
        let state = AppState::with_players(roster);
        let first = players_selector(&state).clone();
        let second = players_selector(&state).clone();
        prop_assert_eq!(first, second);
    }
}
