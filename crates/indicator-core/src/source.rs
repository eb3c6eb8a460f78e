// File: crates/indicator-core/src/source.rs
// Summary: Reads a data file into memory for the pipeline.

use std::path::Path;

use crate::error::DataError;

pub fn read_source(path: impl AsRef<Path>) -> Result<String, DataError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| DataError::Io { path: path.to_path_buf(), source })
}
