use anyhow::Result;
use textgrid::{from_csv, render, row, to_csv, to_markdown, Align, CsvOptions, Table};

fn sample_table() -> Result<Table> {
    let mut table = Table::with_headers(["id", "x", "y", "z"]);
    table.set_precision_all(3);
    table.append_row(row![0, 12.0, 45.0, 67.0])?;
    Ok(table)
}

#[test]
fn rendering_tracks_header_and_cell_widths() -> Result<()> {
    let table = sample_table()?;
    // "id" vs "0" keeps the first column at width 2, "12.000" sets width 6
    assert_eq!(table.columns()[0].max_width(), 2);
    assert_eq!(table.columns()[1].max_width(), 6);
    let expected = "\
+----+--------+--------+--------+
| id |   x    |   y    |   z    |
+----+--------+--------+--------+
| 0  | 12.000 | 45.000 | 67.000 |
+----+--------+--------+--------+
";
    assert_eq!(render(&table), expected);
    Ok(())
}

#[test]
fn csv_round_trip_preserves_headers_and_cell_text() -> Result<()> {
    let mut table = sample_table()?;
    table.append_row(row![1, 0.5, -3.25, 100.0])?;
    let exported = to_csv(&table, ',');
    let reloaded = from_csv(&exported, &CsvOptions::new(4).with_precision(3));
    assert_eq!(reloaded.column_count(), table.column_count());
    assert_eq!(reloaded.row_count(), table.row_count());
    for column in 0..table.column_count() {
        assert_eq!(reloaded.header_at(column)?, table.header_at(column)?);
        for row in 0..table.row_count() {
            assert_eq!(reloaded.item_at(row, column)?, table.item_at(row, column)?);
        }
    }
    assert_eq!(to_csv(&reloaded, ','), exported);
    Ok(())
}

#[test]
fn failed_append_is_atomic() -> Result<()> {
    let mut table = Table::with_headers(["a", "b"]);
    table.append_row(row![12, 34.5])?;
    assert!(table.append_row(row![1, 2, 3]).is_err());
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.item_at(0, 0)?, "12");
    assert_eq!(table.item_at(0, 1)?, "34.5");
    Ok(())
}

#[test]
fn ragged_csv_line_pads_with_no_data() {
    let table = from_csv("a,b,c\n1,2\n", &CsvOptions::new(3));
    assert_eq!(table.item_at(0, 2).unwrap(), "No-Data");
}

#[test]
fn empty_model_renders_like_the_placeholder_table() {
    let empty = Table::new();
    let placeholder = Table::with_headers(["empty"]);
    assert_eq!(render(&empty), render(&placeholder));
}

#[test]
fn deleting_the_widest_row_shrinks_widths_on_rescan() -> Result<()> {
    let mut table = Table::with_headers(["id", "x"]);
    table.set_precision_all(1);
    table.append_row(row![1, 2.5])?;
    let narrow: Vec<usize> = table.columns().iter().map(|c| c.max_width()).collect();
    table.append_row(row![123456, 7.5])?;
    assert_eq!(table.columns()[0].max_width(), 6);
    table.delete_row(1)?;
    let restored: Vec<usize> = table.columns().iter().map(|c| c.max_width()).collect();
    assert_eq!(restored, narrow);
    Ok(())
}

#[test]
fn mixed_alignment_renders_each_column_by_its_own_rule() -> Result<()> {
    let mut table = Table::with_headers(["name", "count", "ratio"]);
    table.set_align(0, Align::Left)?;
    table.set_align(1, Align::Right)?;
    table.set_precision(2, 2)?;
    table.append_row(row!["ab", 7, 0.5])?;
    let expected = "\
+------+-------+-------+
| name | count | ratio |
+------+-------+-------+
| ab   |     7 | 0.50  |
+------+-------+-------+
";
    assert_eq!(render(&table), expected);
    Ok(())
}

#[test]
fn markdown_export_matches_github_table_syntax() -> Result<()> {
    let mut table = Table::with_headers(["id", "x"]);
    table.set_precision_all(1);
    table.append_row(row![0, 1.5])?;
    assert_eq!(to_markdown(&table), "|id|x|\n|----|----|\n|0|1.5|\n");
    Ok(())
}
