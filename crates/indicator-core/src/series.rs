// File: crates/indicator-core/src/series.rs
// Summary: Series model (chart-ready numeric sequence with visibility flags) and the row normalizer.
// Notes:
// - `values` and `labels` are filtered together so they stay positionally
//   aligned; charting collaborators zip them by index.

use serde::Serialize;

use crate::numeric::{leading_int, leading_number};
use crate::selection::SelectionState;
use crate::table::RawRow;

/// Selection-independent content of one row. Cached per row by `Dataset`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub labels: Vec<i64>,
}

impl NumericSeries {
    /// Extract `(year, value)` pairs from every non-name column whose key is a
    /// year and whose cell parses as a number. Everything else is skipped.
    pub fn from_row(row: &RawRow, name_column: &str) -> Self {
        let mut values = Vec::new();
        let mut labels = Vec::new();
        for (key, cell) in row.iter().filter(|(key, _)| *key != name_column) {
            let (Some(year), Some(value)) = (leading_int(key), leading_number(cell)) else {
                continue;
            };
            labels.push(year);
            values.push(value);
        }
        Self {
            name: row.get(name_column).unwrap_or_default().to_string(),
            values,
            labels,
        }
    }

    /// Attach visibility flags for the row at `pos`.
    pub fn to_series(&self, pos: usize, selection: SelectionState) -> Series {
        let on = selection.is_selected(pos);
        Series {
            name: self.name.clone(),
            values: self.values.clone(),
            labels: self.labels.clone(),
            visible: on,
            highlighted: on,
        }
    }
}

/// Chart-ready series. Serialized with the key names line-chart libraries expect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(rename = "data")]
    pub values: Vec<f64>,
    pub labels: Vec<i64>,
    pub visible: bool,
    #[serde(rename = "showInLegend")]
    pub highlighted: bool,
}

impl Series {
    /// Zipped `(year, value)` coordinates.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| (x as f64, y))
            .collect()
    }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Normalize one row at position `pos` against the current selection.
pub fn normalize(row: &RawRow, pos: usize, selection: SelectionState, name_column: &str) -> Series {
    NumericSeries::from_row(row, name_column).to_series(pos, selection)
}
