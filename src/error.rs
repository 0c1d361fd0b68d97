use crate::codec::CsvError;
use crate::table::TableError;
use thiserror::Error;

/// Top-level error type for the crate.
/// Aggregates the table model and codec error taxonomies.
#[derive(Error, Debug)]
pub enum TextGridError {
    #[error("{0}")]
    TableError(#[from] TableError),

    #[error("{0}")]
    CsvError(#[from] CsvError),
}
