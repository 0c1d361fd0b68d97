//! # Grid Rendering
//!
//! Draws a table as a bordered monospaced grid built from `+`, `-` and `|`
//! characters. The renderer only reads the model: widths come from each
//! column's tracked maximum, headers are always centered, and cells follow
//! their column's alignment.

use crate::table::column::display_width;
use crate::table::Align;
use crate::table::Table;
use std::fmt;
use std::fmt::Display;

/// Renders the table as a bordered monospaced grid, one `\n`-terminated
/// line at a time. A table without columns draws as a one-column
/// placeholder containing the literal text "empty".
pub fn render(table: &Table) -> String {
    if table.is_empty() {
        return render(&Table::with_headers(["empty"]));
    }
    let line = border_line(table);
    let mut output = String::new();
    output.push_str(&line);
    output.push('\n');
    output.push_str(&header_line(table));
    output.push('\n');
    output.push_str(&line);
    output.push('\n');
    for row in 0..table.row_count() {
        output.push_str(&data_line(table, row));
        output.push('\n');
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// `+` followed by `max_width + 2` dashes and a `+` per column.
fn border_line(table: &Table) -> String {
    let mut line = String::from("+");
    for column in table.columns() {
        line.push_str(&"-".repeat(column.max_width() + 2));
        line.push('+');
    }
    line
}

/// Header labels are centered regardless of their column's alignment.
fn header_line(table: &Table) -> String {
    let mut line = String::from("|");
    for column in table.columns() {
        line.push_str(&pad_field(column.header(), column.max_width(), Align::Center));
        line.push('|');
    }
    line
}

fn data_line(table: &Table, row: usize) -> String {
    let mut line = String::from("|");
    for column in table.columns() {
        line.push_str(&pad_field(&column.cells()[row], column.max_width(), column.align()));
        line.push('|');
    }
    line
}

/// Pads content into a field of `width + 2` display columns, one flanking
/// space on each side. Centering puts the extra column of an odd gap on
/// the right.
fn pad_field(content: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(display_width(content));
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Center => (gap / 2, gap - gap / 2),
        Align::Right => (gap, 0),
    };
    format!(" {}{}{} ", " ".repeat(left), content, " ".repeat(right))
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self))
    }
}
