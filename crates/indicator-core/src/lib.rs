// File: crates/indicator-core/src/lib.rs
// Summary: Core library entry point; exports the CSV-to-chart transformation pipeline.

pub mod error;
pub mod options;
pub mod numeric;
pub mod table;
pub mod series;
pub mod menu;
pub mod selection;
pub mod pipeline;
pub mod source;

pub use error::DataError;
pub use options::{GroupAnchor, LoadOptions, Pivot};
pub use table::{RawRow, RawTable};
pub use series::{normalize, NumericSeries, Series};
pub use menu::{group_menu, MenuGroup, MenuOption};
pub use selection::{select, try_select, SelectionState};
pub use pipeline::{load_and_transform, Dataset, Session, Transformed};
pub use source::read_source;
