use super::*;
use crate::backend::Record;

#[test]
fn default_state_is_unchecked_and_empty() {
    let state = AppState::default();
    assert!(state.session.is_none());
    assert!(!state.checked_auth);
    assert!(state.records.is_empty());
    assert!(!state.is_signed_in());
}

#[test]
fn apply_session_marks_checked_and_replaces_wholesale() {
    let mut state = AppState::default();
    state.apply_session(Some(Session::new("a")));
    assert!(state.checked_auth);
    assert!(state.is_signed_in());

    state.apply_session(Some(Session::new("b")));
    assert_eq!(state.session, Some(Session::new("b")));

    state.apply_session(None);
    assert!(state.checked_auth);
    assert!(!state.is_signed_in());
}

#[test]
fn clear_records_empties_collection() {
    let mut state = AppState::default();
    state.records.insert("id1", Record::new("X", ""));
    state.clear_records();
    assert!(state.records.is_empty());
}
