//! # Codec Module
//!
//! Pure translation between tables and flat text formats: CSV in both
//! directions, Markdown out. Codecs only read or build the model; they
//! never depend on the renderer.

pub(crate) mod csv;
pub(crate) mod markdown;

pub use csv::from_csv;
pub use csv::from_csv_path;
pub use csv::from_csv_reader;
pub use csv::split;
pub use csv::to_csv;
pub use csv::CsvError;
pub use csv::CsvOptions;
pub use markdown::to_markdown;
