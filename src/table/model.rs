use crate::table::column::Align;
use crate::table::column::Column;
use crate::table::value::Value;
use thiserror::Error;

/// Errors raised by table mutation and access operations.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    /// A row carried the wrong number of values for this table
    #[error("Row has {actual} values but the table has {expected} columns")]
    ArityMismatch { expected: usize, actual: usize },

    /// A row or column index fell outside the valid bounds
    #[error("Index {index} is out of range, valid bound is {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

/// An ordered sequence of columns holding rectangular tabular data.
///
/// Every column always stores the same number of cells; operations validate
/// their arguments before touching any column, so a failed call leaves the
/// table unchanged.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Precision for columns created without an explicit one
    pub(crate) const DEFAULT_PRECISION: usize = 1;

    /// Creates a table with no columns.
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Creates a table with one empty, center-aligned column per header label.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: headers
                .into_iter()
                .map(|header| Column::new(header.as_ref(), Align::default(), Self::DEFAULT_PRECISION, 0))
                .collect(),
        }
    }

    /// Number of rows, derived from the first column since all columns match.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Read-only view of the columns, for rendering and export.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable column access for the CSV codec, which fills columns directly.
    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Appends a row of typed values, one per column.
    pub fn append_row(&mut self, values: Vec<Value>) -> Result<&mut Self, TableError> {
        self.insert_row(self.row_count(), values)
    }

    /// Inserts a row of typed values at `index`, shifting later rows down.
    /// Each value is stringified with its target column's precision; the row
    /// is validated against the column count before any column changes.
    pub fn insert_row(&mut self, index: usize, values: Vec<Value>) -> Result<&mut Self, TableError> {
        if values.len() != self.column_count() {
            return Err(TableError::ArityMismatch {
                expected: self.column_count(),
                actual: values.len(),
            });
        }
        let bound = self.row_count();
        if index > bound {
            return Err(TableError::IndexOutOfRange { index, bound });
        }
        let items: Vec<String> = self
            .columns
            .iter()
            .zip(values.iter())
            .map(|(column, value)| value.render(column.precision()))
            .collect();
        for (column, item) in self.columns.iter_mut().zip(items) {
            column.insert_cell(index, item);
        }
        Ok(self)
    }

    /// Overwrites the cell at `[row, column]` with a re-stringified value.
    pub fn set_item<V>(&mut self, value: V, row: usize, column: usize) -> Result<&mut Self, TableError>
    where
        V: Into<Value>,
    {
        self.check_row(row)?;
        self.check_column(column)?;
        let target = &mut self.columns[column];
        let item = value.into().render(target.precision());
        target.set_cell(row, item);
        Ok(self)
    }

    /// Appends a column, pre-filled with empty placeholder cells so every
    /// existing row keeps its full width.
    pub fn append_column(&mut self, header: &str, align: Align, precision: usize) -> &mut Self {
        let rows = self.row_count();
        self.columns.push(Column::new(header, align, precision, rows));
        self
    }

    /// Appends one column per header label with default metadata.
    pub fn append_columns<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for header in headers {
            self.append_column(header.as_ref(), Align::default(), Self::DEFAULT_PRECISION);
        }
        self
    }

    /// Inserts a column at `index`, pre-filled with empty placeholder cells.
    pub fn insert_column(
        &mut self,
        index: usize,
        header: &str,
        align: Align,
        precision: usize,
    ) -> Result<&mut Self, TableError> {
        let bound = self.column_count();
        if index > bound {
            return Err(TableError::IndexOutOfRange { index, bound });
        }
        let rows = self.row_count();
        self.columns.insert(index, Column::new(header, align, precision, rows));
        Ok(self)
    }

    /// Removes the row at `index` from every column.
    pub fn delete_row(&mut self, index: usize) -> Result<&mut Self, TableError> {
        self.check_row(index)?;
        for column in &mut self.columns {
            column.remove_cell(index);
        }
        Ok(self)
    }

    /// Removes `count` contiguous rows starting at `start`, validating the
    /// whole range up front so a bad call changes nothing.
    pub fn delete_rows(&mut self, start: usize, count: usize) -> Result<&mut Self, TableError> {
        let bound = self.row_count();
        if start + count > bound {
            return Err(TableError::IndexOutOfRange { index: start + count, bound });
        }
        for column in &mut self.columns {
            column.remove_cells(start, count);
        }
        Ok(self)
    }

    /// Removes the column at `index`.
    pub fn delete_column(&mut self, index: usize) -> Result<&mut Self, TableError> {
        self.check_column(index)?;
        self.columns.remove(index);
        Ok(self)
    }

    /// Removes `count` contiguous columns starting at `start`.
    pub fn delete_columns(&mut self, start: usize, count: usize) -> Result<&mut Self, TableError> {
        let bound = self.column_count();
        if start + count > bound {
            return Err(TableError::IndexOutOfRange { index: start + count, bound });
        }
        self.columns.drain(start..start + count);
        Ok(self)
    }

    /// Empties every column's cells; headers and column metadata survive.
    pub fn clear_rows(&mut self) -> &mut Self {
        for column in &mut self.columns {
            column.clear_cells();
        }
        self
    }

    /// Drops all columns; the table becomes empty.
    pub fn clear(&mut self) -> &mut Self {
        self.columns.clear();
        self
    }

    /// Replaces the header label at `column`. The column's tracked width
    /// only grows, even when the new label is shorter.
    pub fn set_header(&mut self, column: usize, header: &str) -> Result<&mut Self, TableError> {
        self.check_column(column)?;
        self.columns[column].set_header(header);
        Ok(self)
    }

    /// Sets the alignment of the column at `column`.
    pub fn set_align(&mut self, column: usize, align: Align) -> Result<&mut Self, TableError> {
        self.check_column(column)?;
        self.columns[column].set_align(align);
        Ok(self)
    }

    /// Sets the alignment of every column.
    pub fn set_align_all(&mut self, align: Align) -> &mut Self {
        for column in &mut self.columns {
            column.set_align(align);
        }
        self
    }

    /// Sets the float precision of the column at `column`.
    pub fn set_precision(&mut self, column: usize, precision: usize) -> Result<&mut Self, TableError> {
        self.check_column(column)?;
        self.columns[column].set_precision(precision);
        Ok(self)
    }

    /// Sets the float precision of every column.
    pub fn set_precision_all(&mut self, precision: usize) -> &mut Self {
        for column in &mut self.columns {
            column.set_precision(precision);
        }
        self
    }

    /// The header label at `column`.
    pub fn header_at(&self, column: usize) -> Result<&str, TableError> {
        self.check_column(column)?;
        Ok(self.columns[column].header())
    }

    /// The alignment at `column`.
    pub fn align_at(&self, column: usize) -> Result<Align, TableError> {
        self.check_column(column)?;
        Ok(self.columns[column].align())
    }

    /// The float precision at `column`.
    pub fn precision_at(&self, column: usize) -> Result<usize, TableError> {
        self.check_column(column)?;
        Ok(self.columns[column].precision())
    }

    /// The stored cell text at `[row, column]`.
    pub fn item_at(&self, row: usize, column: usize) -> Result<&str, TableError> {
        self.check_row(row)?;
        self.check_column(column)?;
        Ok(self.columns[column].cells()[row].as_str())
    }

    /// One-line structural summary of the table.
    pub fn table_info(&self) -> String {
        let fields: Vec<String> = self.columns.iter().map(Column::info).collect();
        format!(
            "{{'rows': {}, 'columns': {}, 'fields': [{}]}}",
            self.row_count(),
            self.column_count(),
            fields.join(", ")
        )
    }

    fn check_row(&self, row: usize) -> Result<(), TableError> {
        let bound = self.row_count();
        if row >= bound {
            return Err(TableError::IndexOutOfRange { index: row, bound });
        }
        Ok(())
    }

    fn check_column(&self, column: usize) -> Result<(), TableError> {
        let bound = self.column_count();
        if column >= bound {
            return Err(TableError::IndexOutOfRange { index: column, bound });
        }
        Ok(())
    }
}
