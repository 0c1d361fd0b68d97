//! # textgrid
//!
//! A tabular text-rendering library: heterogeneous typed values organized
//! into named columns, laid out as a bordered monospaced grid with
//! per-column alignment and numeric precision control, with CSV round-trip
//! and Markdown export.
//!
//! ## Features
//!
//! - **Rectangular data model**: every mutation keeps all columns at the
//!   same row count, and validation happens before mutation
//! - **Typed cell values**: booleans, integers, floats and text, each
//!   stringified by its column's precision rule
//! - **Tracked column widths**: widths grow on insert and are rescanned on
//!   deletion, measured in display columns so wide characters line up
//! - **Per-column presentation**: left/center/right alignment and float
//!   precision
//! - **Permissive CSV parsing**: ragged rows tolerated with "No-Data" and
//!   "No-Header" placeholders
//! - **Markdown export**: unpadded GitHub-flavored table syntax
//!
//! ## Example
//!
//! ```
//! use textgrid::{row, Align, Table};
//!
//! let mut table = Table::with_headers(["id", "x"]);
//! table.set_precision_all(3);
//! table.set_align(0, Align::Right)?;
//! table.append_row(row![0, 12.0])?;
//! print!("{table}");
//! # Ok::<(), textgrid::TableError>(())
//! ```
mod codec;
mod error;
mod render;
mod table;

pub use crate::codec::from_csv;
pub use crate::codec::from_csv_path;
pub use crate::codec::from_csv_reader;
pub use crate::codec::split;
pub use crate::codec::to_csv;
pub use crate::codec::to_markdown;
pub use crate::codec::CsvError;
pub use crate::codec::CsvOptions;
pub use crate::error::TextGridError;
pub use crate::render::render;
pub use crate::table::Align;
pub use crate::table::Column;
pub use crate::table::Table;
pub use crate::table::TableError;
pub use crate::table::Value;

/// Builds an ordered row of [`Value`]s from mixed typed expressions, for
/// use with `append_row` and `insert_row`.
#[macro_export]
macro_rules! row {
    () => {
        Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}
