// File: crates/indicator-core/src/pipeline.rs
// Summary: Explicit load -> transform pipeline and the session object that re-runs it per selection.
// Notes:
// - The row table and per-row numeric content are built once per load.
// - Series and menu are rebuilt (never patched) on every selection change.

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::DataError;
use crate::menu::{group_menu, MenuGroup};
use crate::numeric::leading_int;
use crate::options::LoadOptions;
use crate::selection::{self, SelectionState};
use crate::series::{NumericSeries, Series};
use crate::table::RawTable;

/// Output handed to the selector surface and the charting collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Transformed {
    pub menu: Vec<MenuGroup>,
    pub series: Vec<Series>,
}

impl Transformed {
    pub fn visible_series(&self) -> impl Iterator<Item = &Series> + '_ {
        self.series.iter().filter(|s| s.visible)
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parsed rows plus cached numeric content.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    table: RawTable,
    numeric: Vec<NumericSeries>,
    pivot: Option<String>,
    opts: LoadOptions,
}

impl Dataset {
    pub fn parse(text: &str, opts: &LoadOptions) -> Result<Self, DataError> {
        Ok(Self::from_table(RawTable::parse(text, opts)?, opts))
    }

    pub fn from_table(table: RawTable, opts: &LoadOptions) -> Self {
        let non_year: Vec<&str> = table
            .headers()
            .iter()
            .filter(|h| **h != opts.name_column && leading_int(h).is_none())
            .map(String::as_str)
            .collect();
        if !non_year.is_empty() {
            warn!(columns = ?non_year, "columns without a year key are not charted");
        }

        let pivot = opts.pivot_column(table.headers()).map(str::to_string);
        if pivot.is_none() && !table.is_empty() {
            warn!(pivot = ?opts.pivot, "pivot column not found; menu will be empty");
        }

        let numeric = table
            .rows()
            .iter()
            .map(|row| NumericSeries::from_row(row, &opts.name_column))
            .collect::<Vec<_>>();
        debug!(rows = numeric.len(), pivot = ?pivot, "dataset ready");

        Self { table, numeric, pivot, opts: opts.clone() }
    }

    pub fn empty(opts: &LoadOptions) -> Self {
        Self { opts: opts.clone(), ..Self::default() }
    }

    pub fn table(&self) -> &RawTable { &self.table }

    pub fn options(&self) -> &LoadOptions { &self.opts }

    pub fn pivot_column(&self) -> Option<&str> { self.pivot.as_deref() }

    pub fn len(&self) -> usize { self.table.len() }

    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    pub fn series(&self, selection: SelectionState) -> Vec<Series> {
        self.numeric
            .iter()
            .enumerate()
            .map(|(pos, n)| n.to_series(pos, selection))
            .collect()
    }

    pub fn menu(&self, selection: SelectionState) -> Vec<MenuGroup> {
        group_menu(
            self.table.rows(),
            self.pivot.as_deref(),
            &self.opts.name_column,
            self.opts.grouping,
            selection,
        )
    }

    pub fn transform(&self, selection: SelectionState) -> Transformed {
        Transformed { menu: self.menu(selection), series: self.series(selection) }
    }
}

/// Parse and transform in one pass. Unparseable input degrades to empty output.
pub fn load_and_transform(csv_text: &str, selection: SelectionState, opts: &LoadOptions) -> Transformed {
    match Dataset::parse(csv_text, opts) {
        Ok(dataset) => dataset.transform(selection),
        Err(e) => {
            error!(error = %e, "failed to parse data; nothing to chart");
            Transformed::default()
        }
    }
}

/// Injectable UI state: the loaded dataset, current selection and latest output.
#[derive(Clone, Debug)]
pub struct Session {
    dataset: Dataset,
    selection: SelectionState,
    view: Transformed,
}

impl Session {
    /// Pre-data state: no menu, no series.
    pub fn empty(opts: &LoadOptions) -> Self {
        Self::from_dataset(Dataset::empty(opts))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let selection = SelectionState::new(dataset.options().initial_selection);
        let view = dataset.transform(selection);
        Self { dataset, selection, view }
    }

    pub fn load(csv_text: &str, opts: &LoadOptions) -> Self {
        Self::from_source(Ok(csv_text.to_string()), opts)
    }

    /// Build from the outcome of a data fetch. Errors are logged and leave the
    /// session empty; there is no retry.
    pub fn from_source(source: Result<String, DataError>, opts: &LoadOptions) -> Self {
        let parsed = source.and_then(|text| Dataset::parse(&text, opts));
        match parsed {
            Ok(dataset) => Self::from_dataset(dataset),
            Err(e) => {
                error!(error = %e, "data load failed; staying empty");
                Self::empty(opts)
            }
        }
    }

    /// Apply selector input and recompute. Returns false when the input was
    /// rejected and the previous selection kept.
    pub fn select(&mut self, input: &str) -> bool {
        match selection::try_select(self.selection, input) {
            Some(next) => {
                self.apply(next);
                true
            }
            None => false,
        }
    }

    pub fn select_index(&mut self, index: i64) {
        self.apply(SelectionState::new(index));
    }

    fn apply(&mut self, selection: SelectionState) {
        self.selection = selection;
        self.view = self.dataset.transform(selection);
    }

    pub fn selection(&self) -> SelectionState { self.selection }

    pub fn dataset(&self) -> &Dataset { &self.dataset }

    pub fn view(&self) -> &Transformed { &self.view }

    pub fn visible_series(&self) -> impl Iterator<Item = &Series> + '_ {
        self.view.visible_series()
    }
}
