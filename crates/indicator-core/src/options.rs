// File: crates/indicator-core/src/options.rs
// Summary: Load options (column roles, grouping mode, initial selection) with defaults.

use crate::numeric::leading_int;

/// Column whose absence marker flags a group-header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pivot {
    /// First column in header order whose key is a year (the earliest year).
    /// Non-year columns such as codes or units are skipped.
    FirstYear,
    /// Explicit column key, e.g. `"1995"`.
    Column(String),
}

/// Which options a group-header row collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupAnchor {
    /// The header closes the options accumulated before it. Options after
    /// the final header are dropped.
    Closing,
    /// The header opens a group for the rows after it. Rows before the
    /// first header are not selectable.
    Leading,
}

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Reserved column holding each row's label.
    pub name_column: String,
    pub pivot: Pivot,
    pub grouping: GroupAnchor,
    /// Selection index before any user input.
    pub initial_selection: i64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            name_column: "Name".to_string(),
            pivot: Pivot::FirstYear,
            grouping: GroupAnchor::Closing,
            initial_selection: 1,
        }
    }
}

impl LoadOptions {
    pub fn with_grouping(mut self, grouping: GroupAnchor) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_pivot(mut self, column: impl Into<String>) -> Self {
        self.pivot = Pivot::Column(column.into());
        self
    }

    /// Resolve the pivot against a header row. `None` when the header has no
    /// year column (or the explicit column is missing).
    pub fn pivot_column<'a>(&self, headers: &'a [String]) -> Option<&'a str> {
        match &self.pivot {
            Pivot::FirstYear => headers
                .iter()
                .find(|h| **h != self.name_column && leading_int(h).is_some())
                .map(String::as_str),
            Pivot::Column(key) => headers.iter().find(|h| *h == key).map(String::as_str),
        }
    }
}
