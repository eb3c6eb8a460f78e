// File: crates/indicator-core/tests/selection.rs
// Purpose: Selection reducer accepts integer input and ignores everything else.

use indicator_core::{select, try_select, SelectionState};

#[test]
fn defaults_to_second_row() {
    assert_eq!(SelectionState::default().index(), 1);
    assert!(SelectionState::default().is_selected(1));
    assert!(!SelectionState::default().is_selected(0));
}

#[test]
fn integer_input_replaces_index() {
    let s = SelectionState::default();
    assert_eq!(select(s, "3").index(), 3);
    assert_eq!(select(s, " 7 ").index(), 7);
    assert_eq!(select(s, "12abc").index(), 12);
    assert_eq!(select(s, "0").index(), 0);
}

#[test]
fn non_numeric_input_keeps_previous() {
    let s = SelectionState::new(4);
    for input in ["", "abc", "  ", "-", "x9"] {
        assert_eq!(select(s, input), s, "input {input:?}");
    }
}

#[test]
fn out_of_range_is_accepted_but_matches_nothing() {
    let s = select(SelectionState::default(), "-1");
    assert_eq!(s.index(), -1);
    assert!((0..10).all(|pos| !s.is_selected(pos)));

    let far = select(s, "99");
    assert!((0..10).all(|pos| !far.is_selected(pos)));
    assert!(far.is_selected(99));
}

#[test]
fn try_select_reports_acceptance() {
    let s = SelectionState::new(2);
    assert_eq!(try_select(s, "5"), Some(SelectionState::new(5)));
    assert_eq!(try_select(s, "2"), Some(s));
    assert_eq!(try_select(s, "nope"), None);
}

#[test]
fn huge_input_is_an_out_of_range_selection() {
    let s = select(SelectionState::default(), "99999999999999999999");
    assert_eq!(s.index(), i64::MAX);
    assert!((0..10).all(|pos| !s.is_selected(pos)));
    assert_eq!(select(s, "-99999999999999999999").index(), i64::MIN);
}
