// File: crates/indicator-core/src/selection.rs
// Summary: Selection state (active series index) and its pure reducer.

use tracing::{debug, info};

use crate::numeric::leading_int_saturating;

/// Zero-based offset of the active row. Not bounds-checked: an index past the
/// end (or negative) simply matches no row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionState {
    index: i64,
}

impl SelectionState {
    pub const fn new(index: i64) -> Self { Self { index } }

    pub const fn index(&self) -> i64 { self.index }

    pub fn is_selected(&self, pos: usize) -> bool {
        i64::try_from(pos).is_ok_and(|p| p == self.index)
    }
}

impl Default for SelectionState {
    fn default() -> Self { Self::new(1) }
}

/// Parse raw selector input into a new state. `None` when the input has no
/// leading integer. Integers beyond `i64` saturate, so they stay valid
/// (out-of-range) selections rather than being rejected.
pub fn try_select(state: SelectionState, input: &str) -> Option<SelectionState> {
    let Some(index) = leading_int_saturating(input) else {
        debug!(input, "ignoring non-numeric selection");
        return None;
    };
    if index != state.index {
        info!(from = state.index, to = index, "selection changed");
    }
    Some(SelectionState::new(index))
}

/// Apply raw selector input. Input without a leading integer is ignored and
/// the previous state is returned unchanged.
pub fn select(state: SelectionState, input: &str) -> SelectionState {
    try_select(state, input).unwrap_or(state)
}
