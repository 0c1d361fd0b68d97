use crate::table::Table;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Placeholder stored when a parsed line has fewer fields than the table has columns
const NO_DATA: &str = "No-Data";
/// Placeholder label for header slots beyond the parsed header fields
const NO_HEADER: &str = "No-Header";

/// Errors raised when a CSV source cannot be consumed.
#[derive(Error, Debug)]
pub enum CsvError {
    /// The byte stream backing the CSV source failed to open or read
    #[error("Cannot read CSV source: {0}")]
    SourceUnavailable(#[from] std::io::Error),
}

/// Parse settings for CSV sources.
#[derive(Clone, Debug)]
pub struct CsvOptions {
    /// Number of columns the constructed table will have
    pub column_count: usize,
    /// Float precision applied to every created column
    pub precision: usize,
    /// Whether the first line carries header labels
    pub has_headers: bool,
    /// Field delimiter
    pub delimiter: char,
}

impl CsvOptions {
    /// Creates options for a `column_count`-column table: headers expected,
    /// precision 1, comma delimiter.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            precision: Table::DEFAULT_PRECISION,
            has_headers: true,
            delimiter: ',',
        }
    }

    /// Sets the float precision applied to every created column.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Declares whether the first line carries header labels.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Translates the table to delimiter-separated text, a header line then one
/// line per row, every line `\n`-terminated. Cell values are emitted
/// verbatim: embedded delimiters and newlines are not quoted or escaped.
/// A table without columns exports as the one-column "empty" placeholder.
pub fn to_csv(table: &Table, delimiter: char) -> String {
    if table.is_empty() {
        return to_csv(&Table::with_headers(["empty"]), delimiter);
    }
    let delimiter = delimiter.to_string();
    let mut output = String::new();
    let headers: Vec<&str> = table.columns().iter().map(|column| column.header()).collect();
    output.push_str(&headers.join(&delimiter));
    output.push('\n');
    for row in 0..table.row_count() {
        let items: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| column.cells()[row].as_str())
            .collect();
        output.push_str(&items.join(&delimiter));
        output.push('\n');
    }
    output
}

/// Constructs a table from CSV text with a declared column count.
///
/// Parsing is permissive rather than strict: lines with fewer fields than
/// `column_count` pad the remaining columns with "No-Data", missing header
/// slots become "No-Header", and fields beyond `column_count` are ignored.
/// When headers are expected and the source or its first line is empty,
/// the result is an empty (zero-column) table.
pub fn from_csv(source: &str, options: &CsvOptions) -> Table {
    let mut lines = source.lines();
    let headers = if options.has_headers {
        let first = match lines.next() {
            Some(line) => line,
            None => return Table::new(),
        };
        if first.is_empty() {
            return Table::new();
        }
        let mut headers = split(first, options.delimiter, true);
        headers.truncate(options.column_count);
        while headers.len() < options.column_count {
            headers.push(NO_HEADER.to_owned());
        }
        headers
    } else {
        (0..options.column_count)
            .map(|index| format!("Column({index})"))
            .collect()
    };
    let mut table = Table::with_headers(&headers);
    table.set_precision_all(options.precision);
    for line in lines {
        append_record(&mut table, line, options);
    }
    table
}

/// Constructs a table from any buffered CSV byte stream.
/// Read failures surface as [`CsvError::SourceUnavailable`].
pub fn from_csv_reader<R: BufRead>(mut reader: R, options: &CsvOptions) -> Result<Table, CsvError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(from_csv(&source, options))
}

/// Reads a CSV file from disk. An unopenable path surfaces as
/// [`CsvError::SourceUnavailable`].
pub fn from_csv_path<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Table, CsvError> {
    let file = File::open(path)?;
    from_csv_reader(BufReader::new(file), options)
}

/// Splits one line on the delimiter. With `ignore_empty` set, zero-length
/// tokens are dropped, so "a,,b" yields two tokens rather than three.
pub fn split(text: &str, delimiter: char, ignore_empty: bool) -> Vec<String> {
    text.split(delimiter)
        .filter(|token| !ignore_empty || !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Distributes one parsed line into the columns, left to right; columns
/// beyond the fields present receive the "No-Data" placeholder.
fn append_record(table: &mut Table, line: &str, options: &CsvOptions) {
    let items = split(line, options.delimiter, true);
    let present = items.len().min(options.column_count);
    let columns = table.columns_mut();
    for (index, item) in items.into_iter().take(present).enumerate() {
        columns[index].push_cell(item);
    }
    for column in columns.iter_mut().skip(present) {
        column.push_cell(NO_DATA.to_owned());
    }
}
