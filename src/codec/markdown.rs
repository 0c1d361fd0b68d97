use crate::table::Table;

/// Translates the table to GitHub-flavored Markdown: a pipe-delimited
/// header line, one `----|` separator per column, then pipe-delimited data
/// lines. No width padding is applied; Markdown renderers align the grid.
/// A table without columns exports as the one-column "empty" placeholder.
pub fn to_markdown(table: &Table) -> String {
    if table.is_empty() {
        return to_markdown(&Table::with_headers(["empty"]));
    }
    let mut output = String::from("|");
    for column in table.columns() {
        output.push_str(column.header());
        output.push('|');
    }
    output.push_str("\n|");
    for _ in 0..table.column_count() {
        output.push_str("----|");
    }
    output.push('\n');
    for row in 0..table.row_count() {
        output.push('|');
        for column in table.columns() {
            output.push_str(&column.cells()[row]);
            output.push('|');
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn markdown_is_unpadded() {
        let mut table = Table::with_headers(["id", "name"]);
        table.append_row(row![0, "ab"]).unwrap();
        table.append_row(row![1, "longer"]).unwrap();
        assert_eq!(
            to_markdown(&table),
            "|id|name|\n|----|----|\n|0|ab|\n|1|longer|\n"
        );
    }

    #[test]
    fn markdown_of_empty_table_uses_placeholder() {
        assert_eq!(to_markdown(&Table::new()), "|empty|\n|----|\n");
    }
}
