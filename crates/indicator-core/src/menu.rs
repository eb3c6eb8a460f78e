// File: crates/indicator-core/src/menu.rs
// Summary: Menu grouper; partitions rows into named option groups for a grouped selector.
// Notes:
// - A row is a group header when its pivot cell is the absence marker (an
//   empty cell). Any other pivot cell, numeric or not, makes the row an option.
// - In `GroupAnchor::Closing` mode options left after the last header are not
//   emitted. That boundary is kept as-is and reported with a warning.

use serde::Serialize;
use tracing::{debug, warn};

use crate::options::GroupAnchor;
use crate::selection::SelectionState;
use crate::table::RawRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    #[serde(rename = "name")]
    pub display_name: String,
    /// Row position, passed back to `select` when the option is chosen.
    #[serde(rename = "value")]
    pub index: usize,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub label: String,
    pub options: Vec<MenuOption>,
}

/// True when `cell` is the absence marker.
pub fn is_absent(cell: &str) -> bool {
    cell.trim().is_empty()
}

fn is_group_header(row: &RawRow, pivot: Option<&str>) -> bool {
    pivot.and_then(|key| row.get(key)).is_some_and(is_absent)
}

/// Group `rows` in order. `pivot` is the resolved pivot column; without one no
/// row qualifies as a header and the menu is empty.
pub fn group_menu(
    rows: &[RawRow],
    pivot: Option<&str>,
    name_column: &str,
    grouping: GroupAnchor,
    selection: SelectionState,
) -> Vec<MenuGroup> {
    let mut groups = Vec::new();
    let mut pending: Vec<MenuOption> = Vec::new();
    let mut open: Option<String> = None;

    for (pos, row) in rows.iter().enumerate() {
        let name = row.get(name_column).unwrap_or_default().to_string();
        if is_group_header(row, pivot) {
            match grouping {
                GroupAnchor::Closing => {
                    groups.push(MenuGroup { label: name, options: std::mem::take(&mut pending) });
                }
                GroupAnchor::Leading => {
                    if let Some(label) = open.replace(name) {
                        groups.push(MenuGroup { label, options: std::mem::take(&mut pending) });
                    } else if !pending.is_empty() {
                        debug!(count = pending.len(), "options before first group header are not selectable");
                        pending.clear();
                    }
                }
            }
        } else {
            pending.push(MenuOption { display_name: name, index: pos, selected: selection.is_selected(pos) });
        }
    }

    match (grouping, open) {
        (GroupAnchor::Leading, Some(label)) => groups.push(MenuGroup { label, options: pending }),
        (GroupAnchor::Leading, None) if !pending.is_empty() => {
            debug!(count = pending.len(), "no group header found; options are not selectable");
        }
        (GroupAnchor::Closing, _) if !pending.is_empty() => {
            warn!(count = pending.len(), "trailing options have no closing group header; dropped from menu");
        }
        _ => {}
    }

    debug!(groups = groups.len(), "grouped menu");
    groups
}
